//! Field suppliers and deployment profiles
//!
//! A supplier produces the base fields of a record (time, process id,
//! severity) before the message is merged in. A profile names the fields a
//! deployment expects and the positional layout used by text and CSV output.

use super::field::{Fields, MESSAGE_FIELD};
use super::severity::Severity;
use super::timestamp::TimestampFormat;

/// Source of the base fields for every record of one logger
pub trait FieldSupplier: Send + Sync {
    fn base_fields(&self) -> Fields;
}

impl<F> FieldSupplier for F
where
    F: Fn() -> Fields + Send + Sync,
{
    fn base_fields(&self) -> Fields {
        self()
    }
}

/// Positional template shared by both profiles
pub const PROFILE_TEXT_FORMAT: &str = "%s [%d] %s: %s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Profile {
    /// `time`, `pid`, `level`, `message`
    Plain,
    /// `timestamp`, `pid`, `error_severity`, `message`, the layout structured
    /// log collectors ingest
    Storage,
}

impl Profile {
    fn time_field(&self) -> &'static str {
        match self {
            Profile::Plain => "time",
            Profile::Storage => "timestamp",
        }
    }

    fn severity_field(&self) -> &'static str {
        match self {
            Profile::Plain => "level",
            Profile::Storage => "error_severity",
        }
    }

    pub fn timestamp_format(&self) -> TimestampFormat {
        match self {
            Profile::Plain => TimestampFormat::UtcSeconds,
            Profile::Storage => TimestampFormat::UtcMillis,
        }
    }

    /// Declared field order for positional writers
    pub fn declared_fields(&self) -> [&'static str; 4] {
        [self.time_field(), "pid", self.severity_field(), MESSAGE_FIELD]
    }

    pub fn text_format(&self) -> &'static str {
        PROFILE_TEXT_FORMAT
    }

    pub fn supplier(&self, severity: Severity) -> ProfileFields {
        ProfileFields {
            profile: *self,
            severity,
            timestamp: self.timestamp_format(),
        }
    }
}

/// Supplier stamping records with the current time, pid and severity
#[derive(Debug, Clone)]
pub struct ProfileFields {
    profile: Profile,
    severity: Severity,
    timestamp: TimestampFormat,
}

impl ProfileFields {
    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl FieldSupplier for ProfileFields {
    fn base_fields(&self) -> Fields {
        Fields::new()
            .with_field(self.profile.time_field(), self.timestamp.now())
            .with_field("pid", std::process::id())
            .with_field(self.profile.severity_field(), self.severity)
    }
}
