//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Verbosity level gating and routing
//! - Writer kind switching and record layouts
//! - Invalid reconfiguration leaves the facade untouched
//! - File sinks
//! - Error rendering per level

use rust_tracelog::prelude::*;
use rust_tracelog::writers::CsvFormatWriter;
use rust_tracelog::{Destinations, LoggerError};
use std::fmt;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn captured(level: VerbosityLevel) -> (LoggingFacade, MemoryBuffer, MemoryBuffer) {
    let (stdout, out_buf) = Sink::memory();
    let (stderr, err_buf) = Sink::memory();
    let facade = LoggingFacade::builder()
        .level(level)
        .stdout(stdout)
        .stderr(stderr)
        .escalation(Escalation::uniform(EscalationPolicy::LogOnly))
        .build();
    (facade, out_buf, err_buf)
}

#[derive(Debug)]
struct ConnectError {
    source: std::io::Error,
}

impl fmt::Display for ConnectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to connect to storage")
    }
}

impl std::error::Error for ConnectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

fn connect_error() -> ConnectError {
    ConnectError {
        source: std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
    }
}

#[test]
fn test_plain_text_layout() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);

    facade.logger(Severity::Warning).logln("disk almost full");

    let line = err_buf.contents();
    let pid = format!("[{}]", std::process::id());
    assert!(line.contains(&pid), "missing pid in {:?}", line);
    assert!(line.ends_with(" WARNING: disk almost full\n"));
    assert!(line.contains(" UTC "));
}

#[test]
fn test_level_gating_table() {
    let cases = [
        (VerbosityLevel::Normal, [false, true, true, true]),
        (VerbosityLevel::Error, [false, false, false, true]),
        (VerbosityLevel::Devel, [true, true, true, true]),
    ];

    for (level, visible) in cases {
        let (facade, out_buf, err_buf) = captured(level);
        for severity in Severity::ALL {
            facade.log(severity, format!("<{}>", severity));
        }

        let everything = format!("{}{}", out_buf.contents(), err_buf.contents());
        for (severity, expected) in Severity::ALL.iter().zip(visible) {
            assert_eq!(
                everything.contains(&format!("<{}>", severity)),
                expected,
                "{} at {}",
                severity,
                level
            );
        }
    }
}

#[test]
fn test_set_level_is_idempotent() {
    let (facade, _out_buf, _err_buf) = captured(VerbosityLevel::Normal);

    facade.set_level(VerbosityLevel::Devel);
    let once = facade.bindings();
    facade.set_level(VerbosityLevel::Devel);
    assert_eq!(facade.bindings(), once);
}

#[test]
fn test_bogus_level_rejected() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);
    let before = facade.bindings();

    let err = facade.update_level("BOGUS").unwrap_err();
    assert!(matches!(err, LoggerError::InvalidLevel { .. }));
    assert_eq!(
        err.to_string(),
        "got incorrect log level: 'BOGUS', expected one of: NORMAL, DEVEL, ERROR"
    );
    assert_eq!(facade.bindings(), before);

    for near_miss in ["devel", " ERROR ", "Devel"] {
        assert!(facade.update_level(near_miss).is_err(), "accepted {:?}", near_miss);
    }
    assert!(facade.update_writer_kind("json-storage").is_err());
    assert_eq!(facade.bindings(), before);

    facade.info("still normal");
    assert!(err_buf.contents().ends_with("INFO: still normal"));
}

#[test]
fn test_switch_writer_kinds() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);

    facade.update_writer_kind("TEXT STORAGE").unwrap();
    facade.info("text");
    assert!(err_buf.contents().ends_with("INFO: text"));
    err_buf.clear();

    facade.update_writer_kind("CSV STORAGE").unwrap();
    facade.info("a,b");
    let row = err_buf.contents();
    assert!(row.ends_with(",INFO,\"a,b\"\n"), "unexpected row {:?}", row);
    err_buf.clear();

    facade.update_writer_kind("JSON STORAGE").unwrap();
    facade.warning("json");
    let parsed: serde_json::Value = serde_json::from_str(&err_buf.contents()).unwrap();
    let keys: Vec<&String> = parsed.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["error_severity", "message", "pid", "timestamp"]);
    assert_eq!(parsed["error_severity"], "WARNING");
    assert_eq!(parsed["pid"], std::process::id());
    assert_eq!(facade.level(), VerbosityLevel::Normal);
}

#[test]
fn test_storage_timestamp_has_millis() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);
    facade.set_writer_kind(WriterKind::CsvStorage);
    facade.error("x");

    let row = err_buf.contents();
    let timestamp = row.split(',').next().unwrap();
    // 2024-01-01 00:00:00.000 UTC
    assert_eq!(timestamp.len(), 27, "unexpected timestamp {:?}", timestamp);
    assert!(timestamp.ends_with(" UTC"));
    assert_eq!(&timestamp[19..20], ".");
}

#[test]
fn test_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("facade.log");

    let facade = LoggingFacade::builder().stderr(Sink::Discard).build();
    let sink = Sink::file(&log_file).expect("Failed to open log file");
    facade.set_sink_for(Severity::Error, sink);

    facade.logger(Severity::Error).logln("first");
    facade.logger(Severity::Error).logln("second");
    facade.info("not in file");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("ERROR: first"));
    assert!(lines[1].ends_with("ERROR: second"));
}

#[test]
fn test_file_sink_open_failure() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("no-such-dir").join("x.log");

    let err = Sink::file(&missing).unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
    assert!(err.to_string().contains("no-such-dir"));
}

#[test]
fn test_in_flight_logger_survives_reconfiguration() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);
    let held = facade.logger(Severity::Warning);

    facade.set_writer_kind(WriterKind::JsonStorage);
    facade.set_level(VerbosityLevel::Error);

    held.log("old format");
    assert!(err_buf.contents().ends_with("WARNING: old format"));
    assert_eq!(held.writers()[0].name(), "text");
}

#[test]
fn test_error_rendering_per_level() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);

    facade.print_error(&connect_error());
    assert!(err_buf.contents().ends_with("ERROR: failed to connect to storage\n"));
    err_buf.clear();

    facade.set_level(VerbosityLevel::Devel);
    facade.print_error(&connect_error());
    assert!(err_buf
        .contents()
        .ends_with("ERROR: failed to connect to storage\ncaused by: connection refused\n"));
}

#[test]
fn test_fatal_on_error_with_log_only() {
    let (facade, _out_buf, err_buf) = captured(VerbosityLevel::Normal);
    let logger = facade.logger(Severity::Error);

    logger.fatal_on_error(&Ok::<(), ConnectError>(()));
    assert!(err_buf.is_empty());

    logger.fatal_on_error(&Err::<(), _>(connect_error()));
    assert!(err_buf.contents().ends_with("ERROR: failed to connect to storage"));
}

#[test]
fn test_panicln_escalates_after_writing() {
    let (stderr, err_buf) = Sink::memory();
    let facade = LoggingFacade::builder().stderr(stderr).build();
    let logger = facade.logger(Severity::Error);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panicln("unrecoverable");
    }));

    assert!(outcome.is_err());
    assert!(err_buf.contents().ends_with("ERROR: unrecoverable\n"));
}

#[test]
fn test_from_config() {
    let config = LoggingConfig::from_json(r#"{"level": "ERROR", "writer": "JSON STORAGE"}"#)
        .expect("valid config");
    let facade = LoggingFacade::from_config(&config).unwrap();
    assert_eq!(facade.level(), VerbosityLevel::Error);
    assert_eq!(facade.writer_kind(), WriterKind::JsonStorage);

    let bad = LoggingConfig::new("NORMAL", "PROTOBUF");
    assert!(LoggingFacade::from_config(&bad).is_err());
}

#[test]
fn test_custom_destinations() {
    let (shared, buffer) = Sink::memory();
    let facade = LoggingFacade::builder()
        .level(VerbosityLevel::Devel)
        .destinations(Destinations {
            stdout: shared.clone(),
            stderr: shared,
        })
        .build();

    facade.debug("d\n");
    facade.error("e\n");

    let content = buffer.contents();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("DEBUG: d"));
    assert!(lines[1].ends_with("ERROR: e"));
}

#[test]
fn test_custom_severity_logger_with_many_writers() {
    let (csv_sink, csv_buf) = Sink::memory();
    let (json_sink, json_buf) = Sink::memory();
    let json: Arc<dyn FormatWriter> = Arc::new(JsonFormatWriter::new(json_sink));

    let logger = SeverityLogger::builder(Severity::Info)
        .supplier(|| Fields::new().with_field("level", Severity::Info).with_field("pid", 7))
        .writer(CsvFormatWriter::new(csv_sink, ["pid", "level", "message", "absent"]))
        .shared_writer(Arc::clone(&json))
        .build()
        .unwrap();

    logger.log("hello");

    assert_eq!(csv_buf.contents(), "7,INFO,hello,???\n");
    assert_eq!(
        json_buf.contents(),
        "{\n    \"level\": \"INFO\",\n    \"message\": \"hello\",\n    \"pid\": 7\n}"
    );
    assert_eq!(json.metrics().total_written(), 1);
}
