//! Error types for the logging facade
//!
//! Only configuration mistakes surface as errors. The record path (formatting
//! and writing a log line) never returns one to the caller.

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unknown verbosity level name
    #[error("got incorrect log level: '{value}', expected one of: {allowed}")]
    InvalidLevel { value: String, allowed: String },

    /// Unknown writer kind name
    #[error("got incorrect log writer: '{value}', expected one of: {allowed}")]
    InvalidWriterKind { value: String, allowed: String },

    /// Unknown severity name
    #[error("got incorrect severity: '{value}', expected one of: {allowed}")]
    InvalidSeverity { value: String, allowed: String },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },
}

fn join_allowed<I, S>(allowed: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    allowed
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl LoggerError {
    /// Create an invalid level error listing the accepted names
    pub fn invalid_level<I, S>(value: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LoggerError::InvalidLevel {
            value: value.into(),
            allowed: join_allowed(allowed),
        }
    }

    /// Create an invalid writer kind error listing the accepted names
    pub fn invalid_writer_kind<I, S>(value: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LoggerError::InvalidWriterKind {
            value: value.into(),
            allowed: join_allowed(allowed),
        }
    }

    /// Create an invalid severity error listing the accepted names
    pub fn invalid_severity<I, S>(value: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        LoggerError::InvalidSeverity {
            value: value.into(),
            allowed: join_allowed(allowed),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// True for the errors produced by validating a configuration value
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidLevel { .. }
                | LoggerError::InvalidWriterKind { .. }
                | LoggerError::InvalidSeverity { .. }
                | LoggerError::InvalidConfiguration { .. }
        )
    }
}
