//! Core logger types and traits

pub mod config;
pub mod error;
pub mod escalation;
pub mod extract;
pub mod facade;
pub mod field;
pub mod format_writer;
pub mod metrics;
pub mod profile;
pub mod severity;
pub mod severity_logger;
pub mod sink;
pub mod template;
pub mod timestamp;
pub mod verbosity;
pub mod writer_kind;

pub use config::LoggingConfig;
pub use error::{LoggerError, Result};
pub use escalation::{Escalation, EscalationKind, EscalationPolicy, FATAL_EXIT_CODE};
pub use extract::extract;
pub use facade::{Destinations, FacadeSnapshot, LoggingFacade, LoggingFacadeBuilder};
pub use field::{FieldValue, Fields, MESSAGE_FIELD, MISSING_FIELD_PLACEHOLDER};
pub use format_writer::{FormatWriter, LockedSink};
pub use metrics::WriterMetrics;
pub use profile::{FieldSupplier, Profile, ProfileFields, PROFILE_TEXT_FORMAT};
pub use severity::Severity;
pub use severity_logger::{LoggerBinding, SeverityLogger, SeverityLoggerBuilder, WriterBinding};
pub use sink::{MemoryBuffer, Sink};
pub use template::TextTemplate;
pub use timestamp::TimestampFormat;
pub use verbosity::{Destination, ErrorRendering, VerbosityLevel};
pub use writer_kind::WriterKind;
