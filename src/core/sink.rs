//! Byte-stream destinations for formatted records

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Destination a format writer emits into
///
/// Cloning a sink clones the handle, not the destination. The core never
/// reads from or closes a sink.
#[derive(Clone, Default)]
pub enum Sink {
    /// Process standard output
    Stdout,
    /// Process standard error
    #[default]
    Stderr,
    /// Accepts and drops every byte
    Discard,
    /// Any other writer (files, in-memory buffers, ...)
    Shared(SharedWriter),
}

impl Sink {
    /// Wrap an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Sink::Shared(Arc::new(Mutex::new(Box::new(writer))))
    }

    /// Open `path` for appending, creating it if needed
    pub fn file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| {
                LoggerError::io_operation(
                    "opening log sink",
                    format!("cannot open '{}'", path.display()),
                    e,
                )
            })?;
        Ok(Self::from_writer(file))
    }

    /// In-memory sink plus a handle to read back what was written
    pub fn memory() -> (Self, MemoryBuffer) {
        let buffer = MemoryBuffer::new();
        (Self::from_writer(buffer.clone()), buffer)
    }

    /// Write one complete record and flush
    ///
    /// The bytes go out in a single `write_all`, so one record is never split
    /// across two calls on the underlying writer.
    pub fn write_record(&self, bytes: &[u8]) -> io::Result<()> {
        match self {
            Sink::Stdout => {
                let mut out = io::stdout().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Sink::Stderr => {
                let mut out = io::stderr().lock();
                out.write_all(bytes)?;
                out.flush()
            }
            Sink::Discard => Ok(()),
            Sink::Shared(writer) => {
                let mut writer = writer.lock();
                writer.write_all(bytes)?;
                writer.flush()
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sink::Stdout => "stdout",
            Sink::Stderr => "stderr",
            Sink::Discard => "discard",
            Sink::Shared(_) => "shared",
        }
    }

    pub fn is_discard(&self) -> bool {
        matches!(self, Sink::Discard)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sink({})", self.label())
    }
}

/// Growable in-memory byte buffer shared between a sink and its reader
#[derive(Debug, Clone, Default)]
pub struct MemoryBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl MemoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().clone()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn len(&self) -> usize {
        self.bytes.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for MemoryBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink whose every write fails, for exercising drop accounting
#[cfg(test)]
pub(crate) fn failing_sink() -> Sink {
    struct Refusing;

    impl Write for Refusing {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    Sink::from_writer(Refusing)
}
