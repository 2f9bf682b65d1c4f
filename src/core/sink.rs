//! Output sinks
//!
//! [`SharedSink`] is the single destination shared by a root handler and all
//! handlers derived from it. Its lock is held only while one fully rendered
//! record is written.

use super::error::Result;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

#[derive(Clone)]
pub struct SharedSink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl SharedSink {
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Write one complete record; bytes of concurrent records never interleave
    pub fn write_record(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        writer.write_all(bytes)?;
        Ok(())
    }

    pub fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    /// True when both handles point at the same destination
    pub fn same_sink(&self, other: &SharedSink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl fmt::Debug for SharedSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedSink").finish_non_exhaustive()
    }
}

/// In-memory destination whose clones all see the same bytes
///
/// # Example
///
/// ```
/// use rust_log_renderer::prelude::*;
///
/// let sink = MemorySink::new();
/// let handler = Handler::new(sink.clone(), HandlerOptions::default().with_template("{{.Message}}"));
/// handler.handle(&Record::new(LogLevel::Info, "ready")).unwrap();
/// assert_eq!(sink.contents(), "ready\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.buf.lock().clone()
    }

    /// Captured output, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_clones_share_buffer() {
        let sink = MemorySink::new();
        let shared = SharedSink::new(sink.clone());

        shared.write_record(b"one\n").unwrap();
        shared.write_record(b"two\n").unwrap();
        shared.flush().unwrap();

        assert_eq!(sink.contents(), "one\ntwo\n");
        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_write_error_is_returned() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let shared = SharedSink::new(Broken);
        let err = shared.write_record(b"lost\n").unwrap_err();
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_same_sink() {
        let a = SharedSink::new(MemorySink::new());
        let b = a.clone();
        let c = SharedSink::new(MemorySink::new());
        assert!(a.same_sink(&b));
        assert!(!a.same_sink(&c));
    }
}
