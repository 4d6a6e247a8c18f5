//! Process verbosity levels
//!
//! The verbosity level decides which severities reach a real sink and how
//! error values are rendered into messages.

use super::error::LoggerError;
use super::severity::Severity;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VerbosityLevel {
    /// Everything but DEBUG
    #[default]
    Normal,
    /// Everything, with verbose error rendering
    Devel,
    /// Only ERROR
    Error,
}

/// Where a severity's records go under a given verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Stderr,
    Discard,
}

/// How error values are turned into message text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorRendering {
    /// The error's `Display` output
    #[default]
    Plain,
    /// `Display` followed by every `source()` in the chain
    Verbose,
}

impl VerbosityLevel {
    pub const ALL: [VerbosityLevel; 3] = [
        VerbosityLevel::Normal,
        VerbosityLevel::Devel,
        VerbosityLevel::Error,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            VerbosityLevel::Normal => "NORMAL",
            VerbosityLevel::Devel => "DEVEL",
            VerbosityLevel::Error => "ERROR",
        }
    }

    pub fn destination_for(&self, severity: Severity) -> Destination {
        match (self, severity) {
            (VerbosityLevel::Normal, Severity::Debug) => Destination::Discard,
            (VerbosityLevel::Normal, _) => Destination::Stderr,
            (VerbosityLevel::Error, Severity::Error) => Destination::Stderr,
            (VerbosityLevel::Error, _) => Destination::Discard,
            (VerbosityLevel::Devel, Severity::Debug) => Destination::Stdout,
            (VerbosityLevel::Devel, _) => Destination::Stderr,
        }
    }

    pub fn error_rendering(&self) -> ErrorRendering {
        match self {
            VerbosityLevel::Devel => ErrorRendering::Verbose,
            VerbosityLevel::Normal | VerbosityLevel::Error => ErrorRendering::Plain,
        }
    }
}

impl fmt::Display for VerbosityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VerbosityLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VerbosityLevel::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| {
                LoggerError::invalid_level(s, VerbosityLevel::ALL.iter().map(VerbosityLevel::name))
            })
    }
}

impl ErrorRendering {
    pub fn render(&self, err: &dyn Error) -> String {
        let mut out = err.to_string();
        if *self == ErrorRendering::Verbose {
            let mut source = err.source();
            while let Some(cause) = source {
                let _ = write!(out, "\ncaused by: {}", cause);
                source = cause.source();
            }
        }
        out
    }
}
