//! Supported output format and profile combinations

use super::error::LoggerError;
use super::format_writer::FormatWriter;
use super::profile::{FieldSupplier, Profile};
use super::severity::Severity;
use super::sink::Sink;
use crate::writers::{CsvFormatWriter, JsonFormatWriter, TextFormatWriter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WriterKind {
    #[default]
    #[serde(rename = "TEXT PLAIN")]
    TextPlain,
    #[serde(rename = "TEXT STORAGE")]
    TextStorage,
    #[serde(rename = "CSV STORAGE")]
    CsvStorage,
    #[serde(rename = "JSON STORAGE")]
    JsonStorage,
}

impl WriterKind {
    pub const ALL: [WriterKind; 4] = [
        WriterKind::TextPlain,
        WriterKind::TextStorage,
        WriterKind::CsvStorage,
        WriterKind::JsonStorage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WriterKind::TextPlain => "TEXT PLAIN",
            WriterKind::TextStorage => "TEXT STORAGE",
            WriterKind::CsvStorage => "CSV STORAGE",
            WriterKind::JsonStorage => "JSON STORAGE",
        }
    }

    pub fn profile(&self) -> Profile {
        match self {
            WriterKind::TextPlain => Profile::Plain,
            WriterKind::TextStorage | WriterKind::CsvStorage | WriterKind::JsonStorage => {
                Profile::Storage
            }
        }
    }

    /// Build a fresh writer of this kind over `sink`
    pub fn build_writer(&self, sink: Sink) -> Arc<dyn FormatWriter> {
        let profile = self.profile();
        match self {
            WriterKind::TextPlain | WriterKind::TextStorage => Arc::new(TextFormatWriter::new(
                sink,
                profile.text_format(),
                profile.declared_fields(),
            )),
            WriterKind::CsvStorage => {
                Arc::new(CsvFormatWriter::new(sink, profile.declared_fields()))
            }
            WriterKind::JsonStorage => Arc::new(JsonFormatWriter::new(sink)),
        }
    }

    pub fn supplier(&self, severity: Severity) -> Arc<dyn FieldSupplier> {
        Arc::new(self.profile().supplier(severity))
    }
}

impl fmt::Display for WriterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WriterKind {
    type Err = LoggerError;

    /// Only the exact names in [`WriterKind::ALL`] are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WriterKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                LoggerError::invalid_writer_kind(s, WriterKind::ALL.iter().map(WriterKind::name))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Fields;

    #[test]
    fn test_parse_writer_kind() {
        assert_eq!("TEXT PLAIN".parse::<WriterKind>().unwrap(), WriterKind::TextPlain);
        assert_eq!("JSON STORAGE".parse::<WriterKind>().unwrap(), WriterKind::JsonStorage);

        for rejected in ["csv_storage", "json-storage", "text plain", " CSV STORAGE"] {
            assert!(rejected.parse::<WriterKind>().is_err(), "accepted {:?}", rejected);
        }

        let err = "XML".parse::<WriterKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "got incorrect log writer: 'XML', expected one of: \
             TEXT PLAIN, TEXT STORAGE, CSV STORAGE, JSON STORAGE"
        );
    }

    #[test]
    fn test_build_writer_names() {
        let names: Vec<String> = WriterKind::ALL
            .iter()
            .map(|kind| kind.build_writer(Sink::Discard).name().to_string())
            .collect();
        assert_eq!(names, vec!["text", "text", "csv", "json"]);
    }

    #[test]
    fn test_storage_csv_uses_storage_columns() {
        let (sink, buffer) = Sink::memory();
        let writer = WriterKind::CsvStorage.build_writer(sink);

        writer.log(
            &Fields::new()
                .with_field("timestamp", "t")
                .with_field("pid", 1)
                .with_field("error_severity", Severity::Warning)
                .with_field("message", "m"),
        );

        assert_eq!(buffer.contents(), "t,1,WARNING,m\n");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&WriterKind::JsonStorage).unwrap();
        assert_eq!(json, "\"JSON STORAGE\"");
    }
}
