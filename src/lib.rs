//! # Rust Log Renderer
//!
//! A pluggable renderer for structured log records.
//!
//! A [`Handler`] turns a [`Record`] (level, message, timestamp, optional
//! call-site and ordered key/value attributes) into bytes:
//!
//! - **Header template**: `{{.Timestamp}} {{.Level}} {{.Message}}` style
//!   placeholders, with optional level coloring
//! - **Attribute formatters**: one-line `key=value`, one attribute per line,
//!   or a YAML block, selectable per handler
//! - **Derivation**: `with_attrs` / `with_group` produce independent child
//!   handlers that share the sink
//! - **Thread Safe**: each record is rendered privately and written with a
//!   single locked write
//!
//! ```
//! use rust_log_renderer::prelude::*;
//!
//! let sink = MemorySink::new();
//! let handler = Handler::new(
//!     sink.clone(),
//!     HandlerOptions::default().with_template("{{.Level}} {{.Message}}"),
//! );
//!
//! handler
//!     .with_group("group")
//!     .handle(&Record::new(LogLevel::Info, "info").attr("aaa", "bbb"))
//!     .unwrap();
//! assert_eq!(sink.contents(), "INFO info group=[aaa=bbb]\n");
//! ```

#[cfg(feature = "log")]
pub mod bridge;
pub mod core;
pub mod formatters;
pub mod macros;

pub mod prelude {
    #[cfg(feature = "log")]
    pub use crate::bridge::LogBridge;
    pub use crate::core::{
        Attr, AttrValue, CallSite, Handler, HandlerConfig, HandlerOptions, LogLevel, LoggerError,
        MemorySink, Record, Result, SharedSink, TimestampFormat,
    };
    pub use crate::formatters::{
        AttrFormat, AttrFormatter, BasicFormatter, MultilineFormatter, YamlFormatter,
    };
}

#[cfg(feature = "log")]
pub use bridge::LogBridge;
pub use core::{
    Attr, AttrValue, CallSite, Handler, HandlerConfig, HandlerOptions, LogFields, LogLevel,
    LoggerError, MemorySink, Record, Result, SharedSink, TimestampFormat, DEFAULT_TEMPLATE,
};
pub use formatters::{AttrFormat, AttrFormatter, BasicFormatter, MultilineFormatter, YamlFormatter};
