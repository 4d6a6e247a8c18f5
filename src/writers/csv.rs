//! CSV writer: one row per record

use crate::core::{extract, Fields, FormatWriter, LockedSink, Sink, WriterMetrics};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Writes declared fields as one CSV row per record, terminated by `\n`
///
/// A field is quoted when it contains the delimiter, a quote, `\r` or `\n`,
/// starts with whitespace, or is exactly `\.`. Embedded quotes are
/// doubled. A multi-line message therefore stays a single column.
pub struct CsvFormatWriter {
    out: LockedSink,
    fields: Vec<String>,
}

impl CsvFormatWriter {
    pub fn new<I, S>(sink: Sink, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            out: LockedSink::new(sink),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declared_fields(&self) -> &[String] {
        &self.fields
    }

    fn needs_quotes(field: &str) -> bool {
        if field.is_empty() {
            return false;
        }
        if field == "\\." {
            return true;
        }
        if field.contains([DELIMITER, QUOTE, '\r', '\n']) {
            return true;
        }
        field.chars().next().is_some_and(char::is_whitespace)
    }

    /// Append one encoded field to `row`
    fn encode_field(row: &mut String, field: &str) {
        if !Self::needs_quotes(field) {
            row.push_str(field);
            return;
        }
        row.push(QUOTE);
        for c in field.chars() {
            if c == QUOTE {
                row.push(QUOTE);
            }
            row.push(c);
        }
        row.push(QUOTE);
    }

    /// Encode a full row including the terminator
    pub fn encode_row<S: AsRef<str>>(values: &[S]) -> String {
        let mut row = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                row.push(DELIMITER);
            }
            Self::encode_field(&mut row, value.as_ref());
        }
        row.push('\n');
        row
    }
}

impl FormatWriter for CsvFormatWriter {
    fn log(&self, fields: &Fields) {
        let values: Vec<String> = extract(fields, self.fields.as_slice())
            .iter()
            .map(|v| v.to_string())
            .collect();
        self.out.emit(|buf| {
            buf.extend_from_slice(Self::encode_row(values.as_slice()).as_bytes());
            Ok(())
        });
    }

    fn name(&self) -> &str {
        "csv"
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
