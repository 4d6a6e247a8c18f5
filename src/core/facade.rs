//! Logging facade: the severity table and its runtime reconfiguration
//!
//! The facade owns an immutable snapshot of the four severity loggers.
//! Reconfiguring builds a complete new snapshot and swaps it in atomically.
//! Loggers are read without locking, so a log call never waits on a
//! reconfiguration; a caller already holding an old logger finishes against
//! the old sinks.

use super::{
    config::LoggingConfig,
    error::Result,
    escalation::Escalation,
    severity::Severity,
    severity_logger::{LoggerBinding, SeverityLogger},
    sink::Sink,
    verbosity::{Destination, VerbosityLevel},
    writer_kind::WriterKind,
};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// The real sinks behind [`Destination::Stdout`] and [`Destination::Stderr`]
#[derive(Debug, Clone)]
pub struct Destinations {
    pub stdout: Sink,
    pub stderr: Sink,
}

impl Default for Destinations {
    fn default() -> Self {
        Self {
            stdout: Sink::Stdout,
            stderr: Sink::Stderr,
        }
    }
}

impl Destinations {
    pub fn resolve(&self, destination: Destination) -> Sink {
        match destination {
            Destination::Stdout => self.stdout.clone(),
            Destination::Stderr => self.stderr.clone(),
            Destination::Discard => Sink::Discard,
        }
    }
}

/// One complete, immutable configuration of the facade
pub struct FacadeSnapshot {
    level: VerbosityLevel,
    kind: WriterKind,
    loggers: [Arc<SeverityLogger>; 4],
}

impl FacadeSnapshot {
    pub fn level(&self) -> VerbosityLevel {
        self.level
    }

    pub fn writer_kind(&self) -> WriterKind {
        self.kind
    }

    pub fn logger(&self, severity: Severity) -> &Arc<SeverityLogger> {
        &self.loggers[severity.index()]
    }

    pub fn bindings(&self) -> Vec<LoggerBinding> {
        self.loggers.iter().map(|logger| logger.binding()).collect()
    }
}

impl fmt::Debug for FacadeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FacadeSnapshot")
            .field("level", &self.level)
            .field("kind", &self.kind)
            .field("bindings", &self.bindings())
            .finish()
    }
}

fn logger_for(
    escalation: Escalation,
    level: VerbosityLevel,
    kind: WriterKind,
    severity: Severity,
    sink: Sink,
) -> Arc<SeverityLogger> {
    Arc::new(SeverityLogger::single(
        severity,
        kind.supplier(severity),
        kind.build_writer(sink),
        escalation,
        level.error_rendering(),
    ))
}

/// Resolve the routing table for `level` into four fresh loggers
fn snapshot_for(
    destinations: &Destinations,
    escalation: Escalation,
    level: VerbosityLevel,
    kind: WriterKind,
) -> FacadeSnapshot {
    let loggers = Severity::ALL.map(|severity| {
        let sink = destinations.resolve(level.destination_for(severity));
        logger_for(escalation, level, kind, severity, sink)
    });
    FacadeSnapshot {
        level,
        kind,
        loggers,
    }
}

/// Process-wide logging entry point, passed explicitly to whoever logs
///
/// # Example
///
/// ```
/// use rust_tracelog::prelude::*;
///
/// let (stderr, buffer) = Sink::memory();
/// let facade = LoggingFacade::builder().stderr(stderr).build();
///
/// facade.update_writer_kind("CSV STORAGE").unwrap();
/// facade.info("service started");
/// assert!(buffer.contents().ends_with(",INFO,service started\n"));
///
/// facade.update_level("ERROR").unwrap();
/// facade.info("not shown");
/// assert!(!buffer.contents().contains("not shown"));
/// ```
pub struct LoggingFacade {
    current: ArcSwap<FacadeSnapshot>,
    reconfigure: Mutex<()>,
    destinations: Destinations,
    escalation: Escalation,
}

impl LoggingFacade {
    #[must_use]
    pub fn builder() -> LoggingFacadeBuilder {
        LoggingFacadeBuilder::new()
    }

    /// Build a facade from a startup configuration
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let (level, kind) = config.validate()?;
        Ok(Self::builder().level(level).writer_kind(kind).build())
    }

    fn build_logger(
        &self,
        level: VerbosityLevel,
        kind: WriterKind,
        severity: Severity,
        sink: Sink,
    ) -> Arc<SeverityLogger> {
        logger_for(self.escalation, level, kind, severity, sink)
    }

    fn build_snapshot(&self, level: VerbosityLevel, kind: WriterKind) -> FacadeSnapshot {
        snapshot_for(&self.destinations, self.escalation, level, kind)
    }

    /// Current configuration
    pub fn snapshot(&self) -> Arc<FacadeSnapshot> {
        self.current.load_full()
    }

    pub fn level(&self) -> VerbosityLevel {
        self.current.load().level
    }

    pub fn writer_kind(&self) -> WriterKind {
        self.current.load().kind
    }

    pub fn bindings(&self) -> Vec<LoggerBinding> {
        self.current.load().bindings()
    }

    pub fn destinations(&self) -> &Destinations {
        &self.destinations
    }

    /// The logger currently bound to `severity`
    pub fn logger(&self, severity: Severity) -> Arc<SeverityLogger> {
        Arc::clone(self.current.load().logger(severity))
    }

    /// Rebuild all four loggers for `level`, keeping the writer kind
    pub fn set_level(&self, level: VerbosityLevel) {
        let _guard = self.reconfigure.lock();
        let kind = self.current.load().kind;
        self.current.store(Arc::new(self.build_snapshot(level, kind)));
    }

    /// Parse and apply a level name
    ///
    /// An unknown name leaves the configuration untouched.
    pub fn update_level(&self, name: &str) -> Result<VerbosityLevel> {
        let level = name.parse::<VerbosityLevel>()?;
        self.set_level(level);
        Ok(level)
    }

    /// Rebuild all four loggers for `kind`, keeping the level
    pub fn set_writer_kind(&self, kind: WriterKind) {
        let _guard = self.reconfigure.lock();
        let level = self.current.load().level;
        self.current.store(Arc::new(self.build_snapshot(level, kind)));
    }

    /// Parse and apply a writer kind name
    ///
    /// An unknown name leaves the configuration untouched.
    pub fn update_writer_kind(&self, name: &str) -> Result<WriterKind> {
        let kind = name.parse::<WriterKind>()?;
        self.set_writer_kind(kind);
        Ok(kind)
    }

    /// Point one severity at `sink` without touching the others
    ///
    /// The override lasts until the next level or writer kind change, which
    /// rebuilds every binding from the routing table.
    pub fn set_sink_for(&self, severity: Severity, sink: Sink) {
        let _guard = self.reconfigure.lock();
        let current = self.current.load_full();
        let mut loggers = current.loggers.clone();
        loggers[severity.index()] = self.build_logger(current.level, current.kind, severity, sink);
        self.current.store(Arc::new(FacadeSnapshot {
            level: current.level,
            kind: current.kind,
            loggers,
        }));
    }

    pub fn update_sink_for(&self, severity_name: &str, sink: Sink) -> Result<Severity> {
        let severity = severity_name.parse::<Severity>()?;
        self.set_sink_for(severity, sink);
        Ok(severity)
    }

    /// Apply a whole configuration, or nothing if any value is invalid
    pub fn apply(&self, config: &LoggingConfig) -> Result<()> {
        let (level, kind) = config.validate()?;
        let _guard = self.reconfigure.lock();
        self.current.store(Arc::new(self.build_snapshot(level, kind)));
        Ok(())
    }

    #[inline]
    pub fn log(&self, severity: Severity, message: impl Into<String>) {
        self.logger(severity).log(message);
    }

    pub fn log_fmt(&self, severity: Severity, args: fmt::Arguments<'_>) {
        self.logger(severity).log_fmt(args);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Severity::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Severity::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Severity::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Severity::Error, message);
    }

    /// Log an error value on the ERROR logger, rendered for the current level
    pub fn print_error(&self, err: &dyn Error) {
        self.logger(Severity::Error).print_error(err);
    }
}

impl Default for LoggingFacade {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl fmt::Debug for LoggingFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingFacade")
            .field("current", &*self.current.load())
            .field("destinations", &self.destinations)
            .field("escalation", &self.escalation)
            .finish()
    }
}

/// Builder for [`LoggingFacade`]
///
/// Defaults: `NORMAL` level, `TEXT PLAIN` writers, process stdout/stderr,
/// fatal helpers terminate and panic helpers panic.
pub struct LoggingFacadeBuilder {
    level: VerbosityLevel,
    kind: WriterKind,
    destinations: Destinations,
    escalation: Escalation,
}

impl LoggingFacadeBuilder {
    pub fn new() -> Self {
        Self {
            level: VerbosityLevel::default(),
            kind: WriterKind::default(),
            destinations: Destinations::default(),
            escalation: Escalation::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: VerbosityLevel) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn writer_kind(mut self, kind: WriterKind) -> Self {
        self.kind = kind;
        self
    }

    /// Real sink used where the routing table says stdout
    #[must_use = "builder methods return a new value"]
    pub fn stdout(mut self, sink: Sink) -> Self {
        self.destinations.stdout = sink;
        self
    }

    /// Real sink used where the routing table says stderr
    #[must_use = "builder methods return a new value"]
    pub fn stderr(mut self, sink: Sink) -> Self {
        self.destinations.stderr = sink;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn destinations(mut self, destinations: Destinations) -> Self {
        self.destinations = destinations;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn escalation(mut self, escalation: Escalation) -> Self {
        self.escalation = escalation;
        self
    }

    pub fn build(self) -> LoggingFacade {
        let initial = snapshot_for(&self.destinations, self.escalation, self.level, self.kind);
        LoggingFacade {
            current: ArcSwap::from_pointee(initial),
            reconfigure: Mutex::new(()),
            destinations: self.destinations,
            escalation: self.escalation,
        }
    }
}

impl Default for LoggingFacadeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
