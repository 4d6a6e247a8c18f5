//! Severity logger: one severity, one supplier, one or more writers

use super::{
    error::{LoggerError, Result},
    escalation::{Escalation, EscalationKind},
    field::MESSAGE_FIELD,
    format_writer::FormatWriter,
    profile::FieldSupplier,
    severity::Severity,
    verbosity::ErrorRendering,
};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Logs records of a single severity through a fixed list of writers
///
/// Loggers are immutable once built. Reconfiguration builds new loggers and
/// drops the old ones when their last user lets go.
pub struct SeverityLogger {
    severity: Severity,
    supplier: Arc<dyn FieldSupplier>,
    writers: Vec<Arc<dyn FormatWriter>>,
    escalation: Escalation,
    error_rendering: ErrorRendering,
}

/// Observable shape of one writer inside a logger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterBinding {
    pub writer: String,
    pub sink: &'static str,
}

/// Observable shape of a logger, used to compare configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerBinding {
    pub severity: Severity,
    pub writers: Vec<WriterBinding>,
    pub error_rendering: ErrorRendering,
}

impl SeverityLogger {
    #[must_use]
    pub fn builder(severity: Severity) -> SeverityLoggerBuilder {
        SeverityLoggerBuilder::new(severity)
    }

    /// Single-writer logger, the shape every facade binding has
    pub(crate) fn single(
        severity: Severity,
        supplier: Arc<dyn FieldSupplier>,
        writer: Arc<dyn FormatWriter>,
        escalation: Escalation,
        error_rendering: ErrorRendering,
    ) -> Self {
        Self {
            severity,
            supplier,
            writers: vec![writer],
            escalation,
            error_rendering,
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn writers(&self) -> &[Arc<dyn FormatWriter>] {
        &self.writers
    }

    pub fn error_rendering(&self) -> ErrorRendering {
        self.error_rendering
    }

    pub fn binding(&self) -> LoggerBinding {
        LoggerBinding {
            severity: self.severity,
            writers: self
                .writers
                .iter()
                .map(|w| WriterBinding {
                    writer: w.name().to_string(),
                    sink: w.sink_label(),
                })
                .collect(),
            error_rendering: self.error_rendering,
        }
    }

    /// Build the record and hand it to every writer in registration order
    ///
    /// A panicking writer does not stop the remaining writers. The process
    /// panic hook still reports the panic.
    fn dispatch(&self, message: String) {
        let mut fields = self.supplier.base_fields();
        fields.insert(MESSAGE_FIELD, message);

        for writer in &self.writers {
            let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                writer.log(&fields);
            }));
        }
    }

    fn escalate(&self, kind: EscalationKind, message: &str) {
        self.escalation.policy_for(kind).escalate(message);
    }

    pub fn log(&self, message: impl Into<String>) {
        self.dispatch(message.into());
    }

    /// Log a preformatted message, see the crate macros
    pub fn log_fmt(&self, args: fmt::Arguments<'_>) {
        self.dispatch(fmt::format(args));
    }

    /// Log with a trailing newline appended to the message
    pub fn logln(&self, message: impl Into<String>) {
        let mut message = message.into();
        message.push('\n');
        self.dispatch(message);
    }

    /// Render `err` for the current verbosity and log it as one line
    pub fn print_error(&self, err: &dyn Error) {
        let mut message = self.error_rendering.render(err);
        message.push('\n');
        self.dispatch(message);
    }

    pub fn print_on_error<T, E: Error>(&self, result: &std::result::Result<T, E>) {
        if let Err(err) = result {
            self.print_error(err);
        }
    }

    pub fn fatal(&self, message: impl Into<String>) {
        let message = message.into();
        self.dispatch(message.clone());
        self.escalate(EscalationKind::Fatal, &message);
    }

    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) {
        self.fatal(fmt::format(args));
    }

    pub fn fatalln(&self, message: impl Into<String>) {
        let message = message.into();
        self.logln(message.clone());
        self.escalate(EscalationKind::Fatal, &message);
    }

    pub fn fatal_error(&self, err: &dyn Error) {
        self.fatal(self.error_rendering.render(err));
    }

    pub fn fatal_on_error<T, E: Error>(&self, result: &std::result::Result<T, E>) {
        if let Err(err) = result {
            self.fatal_error(err);
        }
    }

    /// Log the error of `result` through `format`, then escalate as fatal
    ///
    /// `format` only runs when `result` is an `Err`.
    pub fn fatal_fmt_on_error<T, E, F>(&self, result: &std::result::Result<T, E>, format: F)
    where
        E: Error,
        F: FnOnce(&E) -> String,
    {
        if let Err(err) = result {
            self.fatal(format(err));
        }
    }

    pub fn panic(&self, message: impl Into<String>) {
        let message = message.into();
        self.dispatch(message.clone());
        self.escalate(EscalationKind::Panic, &message);
    }

    pub fn panic_fmt(&self, args: fmt::Arguments<'_>) {
        self.panic(fmt::format(args));
    }

    pub fn panicln(&self, message: impl Into<String>) {
        let message = message.into();
        self.logln(message.clone());
        self.escalate(EscalationKind::Panic, &message);
    }

    pub fn panic_error(&self, err: &dyn Error) {
        self.panic(self.error_rendering.render(err));
    }

    pub fn panic_on_error<T, E: Error>(&self, result: &std::result::Result<T, E>) {
        if let Err(err) = result {
            self.panic_error(err);
        }
    }

    /// Log the error of `result` through `format`, then panic
    pub fn panic_fmt_on_error<T, E, F>(&self, result: &std::result::Result<T, E>, format: F)
    where
        E: Error,
        F: FnOnce(&E) -> String,
    {
        if let Err(err) = result {
            self.panic(format(err));
        }
    }
}

impl fmt::Debug for SeverityLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeverityLogger")
            .field("binding", &self.binding())
            .field("escalation", &self.escalation)
            .finish()
    }
}

/// Builder for [`SeverityLogger`]
///
/// # Example
/// ```
/// use rust_tracelog::prelude::*;
/// use rust_tracelog::writers::TextFormatWriter;
///
/// let (sink, buffer) = Sink::memory();
/// let logger = SeverityLogger::builder(Severity::Info)
///     .supplier(|| Fields::new().with_field("level", Severity::Info))
///     .writer(TextFormatWriter::new(sink, "%s: %s", ["level", "message"]))
///     .build()
///     .unwrap();
///
/// logger.log("ready");
/// assert_eq!(buffer.contents(), "INFO: ready");
/// ```
pub struct SeverityLoggerBuilder {
    severity: Severity,
    supplier: Option<Arc<dyn FieldSupplier>>,
    writers: Vec<Arc<dyn FormatWriter>>,
    escalation: Escalation,
    error_rendering: ErrorRendering,
}

impl SeverityLoggerBuilder {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            supplier: None,
            writers: Vec::new(),
            escalation: Escalation::default(),
            error_rendering: ErrorRendering::default(),
        }
    }

    /// Set the base field supplier
    ///
    /// Defaults to the plain profile supplier for this severity.
    #[must_use = "builder methods return a new value"]
    pub fn supplier<S: FieldSupplier + 'static>(mut self, supplier: S) -> Self {
        self.supplier = Some(Arc::new(supplier));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_supplier(mut self, supplier: Arc<dyn FieldSupplier>) -> Self {
        self.supplier = Some(supplier);
        self
    }

    /// Add a writer
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: FormatWriter + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Arc::new(writer));
        self
    }

    /// Add a writer that may also be referenced elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_writer(mut self, writer: Arc<dyn FormatWriter>) -> Self {
        self.writers.push(writer);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn escalation(mut self, escalation: Escalation) -> Self {
        self.escalation = escalation;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_rendering(mut self, rendering: ErrorRendering) -> Self {
        self.error_rendering = rendering;
        self
    }

    pub fn build(self) -> Result<SeverityLogger> {
        if self.writers.is_empty() {
            return Err(LoggerError::config(
                "SeverityLogger",
                "at least one format writer is required",
            ));
        }

        let severity = self.severity;
        let supplier = self
            .supplier
            .unwrap_or_else(|| Arc::new(super::profile::Profile::Plain.supplier(severity)));

        Ok(SeverityLogger {
            severity,
            supplier,
            writers: self.writers,
            escalation: self.escalation,
            error_rendering: self.error_rendering,
        })
    }
}
