//! Positional text writer

use crate::core::{
    extract, Fields, FormatWriter, LockedSink, LoggerError, Sink, TextTemplate, WriterMetrics,
};

/// Renders declared fields through a printf-style template
///
/// No newline is appended; a message that should end a line carries its own.
pub struct TextFormatWriter {
    out: LockedSink,
    template: TextTemplate,
    fields: Vec<String>,
}

impl TextFormatWriter {
    /// Create a text writer
    ///
    /// # Example
    ///
    /// ```
    /// use rust_tracelog::{Fields, FormatWriter, Sink};
    /// use rust_tracelog::writers::TextFormatWriter;
    ///
    /// let (sink, buffer) = Sink::memory();
    /// let writer = TextFormatWriter::new(sink, "%s: %s", ["level", "message"]);
    ///
    /// writer.log(&Fields::new().with_field("level", "INFO").with_field("message", "up"));
    /// assert_eq!(buffer.contents(), "INFO: up");
    /// ```
    pub fn new<I, S>(sink: Sink, template: impl Into<TextTemplate>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            out: LockedSink::new(sink),
            template: template.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn template(&self) -> &TextTemplate {
        &self.template
    }

    pub fn declared_fields(&self) -> &[String] {
        &self.fields
    }
}

impl FormatWriter for TextFormatWriter {
    fn log(&self, fields: &Fields) {
        let values = extract(fields, self.fields.as_slice());
        self.out.emit(|buf| {
            let mut line = String::new();
            self.template
                .render_into(&mut line, values.as_slice())
                .map_err(|e| LoggerError::formatter("text", e.to_string()))?;
            buf.extend_from_slice(line.as_bytes());
            Ok(())
        });
    }

    fn name(&self) -> &str {
        "text"
    }

    fn sink_label(&self) -> &'static str {
        self.out.label()
    }

    fn replace_sink(&self, sink: Sink) -> Sink {
        self.out.replace(sink)
    }

    fn metrics(&self) -> &WriterMetrics {
        self.out.metrics()
    }
}
