//! JSON writer for structured collectors

use crate::core::{
    FieldValue, Fields, FormatWriter, LockedSink, LoggerError, Sink, WriterMetrics,
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::collections::BTreeMap;

const INDENT: &[u8] = b"    ";

/// Writes the whole record as one pretty-printed JSON object
///
/// Keys are emitted in lexicographic order whatever order the record was
/// built in. Every field present is written; there is no projection onto a
/// declared list. No trailing newline is added.
pub struct JsonFormatWriter {
    out: LockedSink,
}

impl JsonFormatWriter {
    pub fn new(sink: Sink) -> Self {
        Self {
            out: LockedSink::new(sink),
        }
    }

    /// Serialize a record the way this writer does
    pub fn encode(fields: &Fields, buf: &mut Vec<u8>) -> serde_json::Result<()> {
        let sorted: BTreeMap<&str, &FieldValue> =
            fields.iter().map(|(k, v)| (k.as_str(), v)).collect();
        let mut serializer = Serializer::with_formatter(buf, PrettyFormatter::with_indent(INDENT));
        sorted.serialize(&mut serializer)
    }
}

impl FormatWriter for JsonFormatWriter {
    fn log(&self, fields: &Fields) {
        self.out.emit(|buf| Self::encode(fields, buf).map_err(LoggerError::from));
    }

    fn name(&self) -> &str {
        "json"
    }

    fn sink_label(&self) -> &'static str {
        self.out.label()
    }

    fn replace_sink(&self, sink: Sink) -> Sink {
        self.out.replace(sink)
    }

    fn metrics(&self) -> &WriterMetrics {
        self.out.metrics()
    }
}
