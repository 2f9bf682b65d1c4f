//! Core renderer types

pub mod attribute;
pub mod error;
pub mod fields;
pub mod handler;
pub mod log_level;
pub mod options;
pub mod record;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use attribute::{Attr, AttrValue};
pub use error::{LoggerError, Result};
pub use fields::LogFields;
pub use handler::Handler;
pub use log_level::LogLevel;
pub use options::{HandlerConfig, HandlerOptions, DEFAULT_TEMPLATE};
pub use record::{CallSite, Record};
pub use sink::{MemorySink, SharedSink};
pub use template::{Placeholder, Template};
pub use timestamp::TimestampFormat;
