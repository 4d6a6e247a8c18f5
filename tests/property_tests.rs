//! Property-based tests for rust_tracelog using proptest

use proptest::prelude::*;
use rust_tracelog::prelude::*;
use rust_tracelog::{extract, MISSING_FIELD_PLACEHOLDER};

fn any_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Debug),
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

fn any_writer_kind() -> impl Strategy<Value = WriterKind> {
    prop_oneof![
        Just(WriterKind::TextPlain),
        Just(WriterKind::TextStorage),
        Just(WriterKind::CsvStorage),
        Just(WriterKind::JsonStorage),
    ]
}

// ============================================================================
// Name Parsing Tests
// ============================================================================

proptest! {
    /// Severity labels parse back; lower-case variants are rejected
    #[test]
    fn test_severity_label_roundtrip(severity in any_severity()) {
        prop_assert_eq!(severity.label().parse::<Severity>().unwrap(), severity);
        prop_assert!(severity.label().to_lowercase().parse::<Severity>().is_err());
    }

    /// Writer kind names parse back only with their exact spelling
    #[test]
    fn test_writer_kind_name_roundtrip(
        kind in any_writer_kind(),
        separator in prop_oneof![Just("_"), Just("-")],
    ) {
        prop_assert_eq!(kind.name().parse::<WriterKind>().unwrap(), kind);
        let respelled = kind.name().replace(' ', separator);
        prop_assert!(respelled.parse::<WriterKind>().is_err());
        prop_assert!(kind.name().to_lowercase().parse::<WriterKind>().is_err());
    }

    /// Anything outside the three level names is rejected with the offending text
    #[test]
    fn test_invalid_level_rejected(input in "[a-z]{1,12}") {
        let err = input.parse::<VerbosityLevel>().unwrap_err();
        let quoted = format!("'{}'", input);
        prop_assert!(err.to_string().contains(&quoted));
    }
}

// ============================================================================
// Field Extraction Tests
// ============================================================================

proptest! {
    /// Extraction yields one value per name, in order, with placeholders for gaps
    #[test]
    fn test_extract_order_and_placeholders(
        present in prop::collection::hash_map("[a-z]{1,6}", any::<i64>(), 0..6),
        wanted in prop::collection::vec("[a-z]{1,6}", 0..10),
    ) {
        let record: Fields = present
            .iter()
            .map(|(k, v)| (k.clone(), FieldValue::Int(*v)))
            .collect();

        let values = extract(&record, wanted.as_slice());
        prop_assert_eq!(values.len(), wanted.len());

        for (name, value) in wanted.iter().zip(&values) {
            match present.get(name) {
                Some(expected) => prop_assert_eq!(value.to_string(), expected.to_string()),
                None => prop_assert_eq!(value.to_string(), MISSING_FIELD_PLACEHOLDER),
            }
        }
    }
}

// ============================================================================
// Writer Output Tests
// ============================================================================

proptest! {
    /// Any row the CSV writer emits reads back to the same values
    #[test]
    fn test_csv_row_reads_back(values in prop::collection::vec(any::<String>(), 2..6)) {
        // The reader strips a leading byte order mark.
        prop_assume!(!values[0].starts_with('\u{feff}'));
        let names: Vec<String> = (0..values.len()).map(|i| format!("f{}", i)).collect();
        let record: Fields = names
            .iter()
            .cloned()
            .zip(values.iter().cloned().map(FieldValue::from))
            .collect();

        let (sink, buffer) = Sink::memory();
        CsvFormatWriter::new(sink, names).log(&record);

        let bytes = buffer.bytes();
        prop_assert!(bytes.ends_with(b"\n"));

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes.as_slice());
        let rows: Vec<csv::StringRecord> = reader
            .records()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        prop_assert_eq!(rows.len(), 1);
        let read: Vec<&str> = rows[0].iter().collect();
        prop_assert_eq!(read, values.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// JSON output is valid, carries every field and lists keys in sorted order
    #[test]
    fn test_json_keys_sorted(
        record in prop::collection::hash_map("[a-z_]{1,8}", any::<String>(), 0..8),
    ) {
        let fields: Fields = record
            .iter()
            .map(|(k, v)| (k.clone(), FieldValue::from(v.as_str())))
            .collect();

        let (sink, buffer) = Sink::memory();
        JsonFormatWriter::new(sink).log(&fields);

        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&buffer.contents()).unwrap();
        prop_assert_eq!(parsed.len(), record.len());

        let mut sorted: Vec<&str> = record.keys().map(String::as_str).collect();
        sorted.sort();
        let text = buffer.contents();
        let emitted: Vec<&str> = text
            .lines()
            .filter_map(|line| line.strip_prefix("    \""))
            .filter_map(|rest| rest.split('"').next())
            .collect();
        prop_assert_eq!(emitted, sorted);

        for (key, value) in &record {
            prop_assert_eq!(parsed[key].as_str(), Some(value.as_str()));
        }
    }

    /// Plain text templates substitute values positionally
    #[test]
    fn test_template_substitution(
        a in "[^%]*",
        b in "[^%]*",
        n in any::<i64>(),
    ) {
        let (sink, buffer) = Sink::memory();
        let writer = TextFormatWriter::new(sink, "%s [%d] %s", ["a", "n", "b"]);
        writer.log(
            &Fields::new()
                .with_field("a", a.as_str())
                .with_field("n", n)
                .with_field("b", b.as_str()),
        );
        prop_assert_eq!(buffer.contents(), format!("{} [{}] {}", a, n, b));
    }

    /// Width pads short values on the requested side and never cuts long ones
    #[test]
    fn test_template_width_padding(value in "[a-z]{0,12}", width in 0usize..10) {
        let right = TextTemplate::parse(&format!("%{}s|", width)).render(&[value.as_str()]);
        let left = TextTemplate::parse(&format!("%-{}s|", width)).render(&[value.as_str()]);

        let padded = width.max(value.len());
        prop_assert_eq!(right.len(), padded + 1);
        prop_assert_eq!(left.len(), padded + 1);
        prop_assert_eq!(right.trim_start(), format!("{}|", value));
        prop_assert!(left.starts_with(value.as_str()));
    }

    /// Every writer kind accepts every severity without dropping the record
    #[test]
    fn test_writer_kinds_never_drop(
        kind in any_writer_kind(),
        severity in any_severity(),
        message in any::<String>(),
    ) {
        let (sink, buffer) = Sink::memory();
        let writer = kind.build_writer(sink);
        let mut fields = kind.supplier(severity).base_fields();
        fields.insert("message", message);

        writer.log(&fields);

        prop_assert!(!buffer.is_empty());
        prop_assert_eq!(writer.metrics().total_written(), 1);
        prop_assert_eq!(writer.metrics().dropped_count(), 0);
    }
}
