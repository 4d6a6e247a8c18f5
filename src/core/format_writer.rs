//! Format writer trait and the locked sink every writer serializes through

use super::{
    error::{LoggerError, Result},
    field::Fields,
    metrics::WriterMetrics,
    sink::Sink,
};
use parking_lot::Mutex;

/// Serializes records into a sink
///
/// `log` never reports failure: a record that cannot be formatted or written
/// is dropped and counted in [`WriterMetrics`].
pub trait FormatWriter: Send + Sync {
    fn log(&self, fields: &Fields);
    fn name(&self) -> &str;
    fn sink_label(&self) -> &'static str;

    /// Swap the destination, returning the previous one
    ///
    /// Waits for any record currently being written by this writer.
    fn replace_sink(&self, sink: Sink) -> Sink;

    fn metrics(&self) -> &WriterMetrics;
}

/// A sink behind the per-writer lock
///
/// The lock covers formatting, writing and flushing exactly one record, so
/// two records logged through the same writer never interleave.
#[derive(Debug)]
pub struct LockedSink {
    sink: Mutex<Sink>,
    metrics: WriterMetrics,
}

impl LockedSink {
    pub fn new(sink: Sink) -> Self {
        Self {
            sink: Mutex::new(sink),
            metrics: WriterMetrics::new(),
        }
    }

    /// Format one record with `render` and write it under the lock
    pub fn emit<F>(&self, render: F)
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let sink = self.sink.lock();
        let mut buf = Vec::with_capacity(128);
        let outcome = render(&mut buf)
            .and_then(|()| sink.write_record(&buf).map_err(LoggerError::from));
        drop(sink);

        match outcome {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(_) => {
                self.metrics.record_dropped();
            }
        }
    }

    pub fn replace(&self, sink: Sink) -> Sink {
        std::mem::replace(&mut *self.sink.lock(), sink)
    }

    pub fn label(&self) -> &'static str {
        self.sink.lock().label()
    }

    pub fn metrics(&self) -> &WriterMetrics {
        &self.metrics
    }
}
