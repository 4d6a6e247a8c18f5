//! # Rust Tracelog
//!
//! A structured logging facade: records are bags of named fields that
//! pluggable format writers serialize as printf-style text, CSV rows or
//! pretty JSON.
//!
//! ## Features
//!
//! - **Four severities**: DEBUG, INFO, WARNING and ERROR, each with its own logger
//! - **Runtime reconfiguration**: switch verbosity level or output format atomically
//! - **Thread Safe**: records from concurrent callers never interleave
//! - **Deployment profiles**: plain console output or storage-friendly layouts

pub mod core;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        Destination, ErrorRendering, Escalation, EscalationPolicy, FieldSupplier, FieldValue,
        Fields, FormatWriter, LoggerError, LoggingConfig, LoggingFacade, MemoryBuffer, Profile,
        Result, Severity, SeverityLogger, Sink, TextTemplate, TimestampFormat, VerbosityLevel,
        WriterKind, WriterMetrics,
    };
    pub use crate::writers::{CsvFormatWriter, JsonFormatWriter, TextFormatWriter};
}

pub use core::{
    extract, Destination, Destinations, ErrorRendering, Escalation, EscalationKind,
    EscalationPolicy, FacadeSnapshot, FieldSupplier, FieldValue, Fields, FormatWriter,
    LockedSink, LoggerBinding, LoggerError, LoggingConfig, LoggingFacade, LoggingFacadeBuilder,
    MemoryBuffer, Profile, ProfileFields, Result, Severity, SeverityLogger,
    SeverityLoggerBuilder, Sink, TextTemplate, TimestampFormat, VerbosityLevel, WriterBinding,
    WriterKind, WriterMetrics, FATAL_EXIT_CODE, MESSAGE_FIELD, MISSING_FIELD_PLACEHOLDER,
    PROFILE_TEXT_FORMAT,
};
pub use writers::{CsvFormatWriter, JsonFormatWriter, TextFormatWriter};
