//! Integration with the `log` facade
//!
//! [`LogBridge`] lets a [`Handler`] act as the process-wide `log` backend.
//! Structured key/values (`log::info!(k = v; "msg")`) become attributes and
//! the record's file, line and module path become the call-site.
//!
//! `log::Log::log` cannot return errors, so failures are reported on stderr.

use crate::core::{Attr, CallSite, Handler, LogLevel, Record, Result};
use log::kv::{self, Key, Value, VisitSource};

pub struct LogBridge {
    handler: Handler,
}

impl LogBridge {
    pub fn new(handler: Handler) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Install as the global `log` backend, with the max level taken from the
    /// handler's minimum level.
    pub fn install(handler: Handler) -> std::result::Result<(), log::SetLoggerError> {
        let max_level = handler.options().min_level.into();
        log::set_boxed_logger(Box::new(Self::new(handler)))?;
        log::set_max_level(max_level);
        Ok(())
    }

    /// Convert and handle a `log` record, returning any rendering or write error
    pub fn try_log(&self, record: &log::Record<'_>) -> Result<()> {
        let mut converted = Record::new(LogLevel::from(record.level()), record.args().to_string());

        if let Some(file) = record.file() {
            let function = record.module_path().unwrap_or_default();
            converted = converted.with_call_site(CallSite::new(
                file,
                record.line().unwrap_or(0),
                function,
            ));
        }

        let mut attrs = Vec::new();
        let mut collector = AttrCollector(&mut attrs);
        if let Err(e) = record.key_values().visit(&mut collector) {
            eprintln!("[LOGGER ERROR] Failed to read record key/values: {}", e);
        }

        self.handler.handle(&converted.with_attrs(attrs))
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.handler.enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        if let Err(e) = self.try_log(record) {
            eprintln!("[LOGGER ERROR] Failed to write log record: {}", e);
        }
    }

    fn flush(&self) {
        if let Err(e) = self.handler.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush sink: {}", e);
        }
    }
}

struct AttrCollector<'a>(&'a mut Vec<Attr>);

impl<'kvs> VisitSource<'kvs> for AttrCollector<'_> {
    fn visit_pair(&mut self, key: Key<'kvs>, value: Value<'kvs>) -> std::result::Result<(), kv::Error> {
        self.0.push(Attr::new(key.as_str(), value.to_string()));
        Ok(())
    }
}
