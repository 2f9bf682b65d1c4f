//! Logging macros for ergonomic record construction.
//!
//! The level macros check [`Handler::enabled`](crate::Handler::enabled) before
//! building anything, record the call-site (`file!()` resolved to an absolute
//! path under `CARGO_MANIFEST_DIR`, `line!()`, `module_path!()`), and return
//! the `Result` of `handle`.
//!
//! # Examples
//!
//! ```
//! use rust_log_renderer::prelude::*;
//! use rust_log_renderer::{attrs, info};
//!
//! let sink = MemorySink::new();
//! let handler = Handler::new(
//!     sink.clone(),
//!     HandlerOptions::default().with_template("{{.Level}} {{.Message}}"),
//! );
//!
//! info!(handler, "Server started", "port" => 8080).unwrap();
//! info!(handler, "request", "http" => attrs!["method" => "GET", "status" => 200]).unwrap();
//!
//! assert_eq!(
//!     sink.contents(),
//!     "INFO Server started port=8080\nINFO request http=[method=GET status=200]\n"
//! );
//! ```

/// Build an ordered attribute list.
///
/// ```
/// use rust_log_renderer::{attrs, Attr};
///
/// let list = attrs!["user" => "alice", "retries" => 3];
/// assert_eq!(list, vec![Attr::new("user", "alice"), Attr::new("retries", 3)]);
/// ```
#[macro_export]
macro_rules! attrs {
    ($($key:expr => $value:expr),* $(,)?) => {
        ::std::vec![$($crate::Attr::new($key, $value)),*]
    };
}

/// Emit a record at the given level.
///
/// Evaluates to `Ok(())` without doing any work when the level is disabled.
#[macro_export]
macro_rules! log {
    ($handler:expr, $level:expr, $message:expr $(, $key:expr => $value:expr)* $(,)?) => {{
        let handler = &$handler;
        let level: $crate::LogLevel = $level;
        if handler.enabled(level) {
            let record = $crate::Record::new(level, $message)
                .with_call_site($crate::CallSite::in_crate(
                    env!("CARGO_MANIFEST_DIR"),
                    file!(),
                    line!(),
                    module_path!(),
                ))
                $(.attr($key, $value))*;
            handler.handle(&record)
        } else {
            ::std::result::Result::Ok(())
        }
    }};
}

/// Emit a trace-level record.
#[macro_export]
macro_rules! trace {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Emit a debug-level record.
#[macro_export]
macro_rules! debug {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Emit an info-level record.
#[macro_export]
macro_rules! info {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Emit a warning-level record.
#[macro_export]
macro_rules! warn {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Emit an error-level record.
#[macro_export]
macro_rules! error {
    ($handler:expr, $($arg:tt)+) => {
        $crate::log!($handler, $crate::LogLevel::Error, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Handler, HandlerOptions, LogLevel, MemorySink};

    fn handler(template: &str, level: LogLevel) -> (Handler, MemorySink) {
        let sink = MemorySink::new();
        let options = HandlerOptions::default()
            .with_template(template)
            .with_min_level(level);
        (Handler::new(sink.clone(), options), sink)
    }

    #[test]
    fn test_level_macros() {
        let (handler, sink) = handler("{{.Level}} {{.Message}}", LogLevel::Trace);
        trace!(handler, "t").unwrap();
        debug!(handler, "d").unwrap();
        info!(handler, "i").unwrap();
        warn!(handler, "w").unwrap();
        error!(handler, "e").unwrap();
        assert_eq!(sink.contents(), "TRACE t\nDEBUG d\nINFO i\nWARN w\nERROR e\n");
    }

    #[test]
    fn test_disabled_level_writes_nothing() {
        let (handler, sink) = handler("{{.Message}}", LogLevel::Warn);
        info!(handler, "skipped", "k" => "v").unwrap();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_macro_records_call_site() {
        let (handler, sink) = handler("{{.FileName}}:{{.Function}}", LogLevel::Info);
        info!(handler, "here").unwrap();
        assert_eq!(sink.contents(), format!("macros.rs:{}\n", module_path!()));
    }

    #[test]
    fn test_macro_file_is_absolute() {
        let (handler, sink) = handler("{{.File}}", LogLevel::Info);
        info!(handler, "here").unwrap();

        let file = sink.contents().trim_end().to_string();
        assert!(std::path::Path::new(&file).is_absolute(), "relative path: {file}");
        assert!(file.ends_with("src/macros.rs"));
        assert!(std::path::Path::new(&file).exists());
    }

    #[test]
    fn test_attrs_macro_groups() {
        let (handler, sink) = handler("{{.Message}}", LogLevel::Info);
        info!(handler, format!("n={}", 1), "outer" => attrs!["inner" => true],).unwrap();
        assert_eq!(sink.contents(), "n=1 outer=[inner=true]\n");
    }
}
