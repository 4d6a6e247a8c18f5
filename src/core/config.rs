//! Serializable facade configuration

use super::error::{LoggerError, Result};
use super::verbosity::VerbosityLevel;
use super::writer_kind::WriterKind;
use serde::{Deserialize, Serialize};

/// Startup configuration for a [`LoggingFacade`](super::LoggingFacade)
///
/// Values are kept as the strings an operator wrote so that a bad value is
/// reported with the exact text that was supplied.
///
/// # Example
///
/// ```
/// use rust_tracelog::LoggingConfig;
///
/// let config = LoggingConfig::from_json(r#"{"level": "DEVEL", "writer": "CSV STORAGE"}"#).unwrap();
/// let (level, kind) = config.validate().unwrap();
/// assert_eq!(level.name(), "DEVEL");
/// assert_eq!(kind.name(), "CSV STORAGE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub writer: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: VerbosityLevel::default().name().to_string(),
            writer: WriterKind::default().name().to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, writer: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            writer: writer.into(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| LoggerError::config("LoggingConfig", e.to_string()))
    }

    /// Parse both values; the writer is checked first
    pub fn validate(&self) -> Result<(VerbosityLevel, WriterKind)> {
        let kind = self.writer.parse::<WriterKind>()?;
        let level = self.level.parse::<VerbosityLevel>()?;
        Ok((level, kind))
    }
}
