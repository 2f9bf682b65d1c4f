//! Handler configuration
//!
//! [`HandlerOptions`] is the resolved, immutable configuration of a handler.
//! [`HandlerConfig`] is its serializable counterpart for loading settings from
//! JSON; missing fields take the defaults. Loading a config also checks the
//! template and time layout, so a bad file is rejected before any record is
//! handled.

use super::error::{LoggerError, Result};
use super::log_level::LogLevel;
use super::template::Template;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use crate::formatters::{AttrFormat, AttrFormatter, BasicFormatter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Template used when none (or an empty one) is configured
pub const DEFAULT_TEMPLATE: &str = "{{.Timestamp}} {{.Level}} {{.Message}}";

#[derive(Clone)]
pub struct HandlerOptions {
    /// Records below this level are disabled
    pub min_level: LogLevel,
    /// Header template, see [`crate::core::template`]
    pub template: String,
    pub timestamp_format: TimestampFormat,
    /// Decorate the level with its ANSI color
    pub enable_color: bool,
    pub attr_formatter: Arc<dyn AttrFormatter>,
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            template: DEFAULT_TEMPLATE.to_string(),
            timestamp_format: TimestampFormat::default(),
            enable_color: false,
            attr_formatter: Arc::new(BasicFormatter),
        }
    }
}

impl HandlerOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set the header template; an empty string keeps the default
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        let template = template.into();
        if !template.is_empty() {
            self.template = template;
        }
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Set a custom strftime time layout
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_color(mut self, enable: bool) -> Self {
        self.enable_color = enable;
        self
    }

    #[must_use]
    pub fn with_attr_format(mut self, format: AttrFormat) -> Self {
        self.attr_formatter = format.formatter();
        self
    }

    /// Use a custom attribute formatter
    #[must_use]
    pub fn with_attr_formatter<F: AttrFormatter + 'static>(mut self, formatter: F) -> Self {
        self.attr_formatter = Arc::new(formatter);
        self
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("min_level", &self.min_level)
            .field("template", &self.template)
            .field("timestamp_format", &self.timestamp_format)
            .field("enable_color", &self.enable_color)
            .field("attr_formatter", &self.attr_formatter.name())
            .finish()
    }
}

/// Serializable handler settings
///
/// # Example
///
/// ```
/// use rust_log_renderer::{HandlerConfig, LogLevel};
///
/// let config = HandlerConfig::from_json(r#"{"level": "debug", "attr_format": "yaml"}"#).unwrap();
/// let options = config.into_options();
/// assert_eq!(options.min_level, LogLevel::Debug);
/// assert_eq!(options.attr_formatter.name(), "yaml");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    pub level: LogLevel,
    pub template: Option<String>,
    pub time_format: TimestampFormat,
    pub color: bool,
    pub attr_format: AttrFormat,
}

impl HandlerConfig {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject templates and time layouts that would fail on every record
    pub fn validate(&self) -> Result<()> {
        if let Some(template) = self.template.as_deref().filter(|t| !t.is_empty()) {
            Template::parse(template)
                .map_err(|e| LoggerError::config("template", e.to_string()))?;
        }
        self.time_format
            .format(&DateTime::<Utc>::UNIX_EPOCH)
            .map_err(|e| LoggerError::config("time_format", e.to_string()))?;
        Ok(())
    }

    pub fn into_options(self) -> HandlerOptions {
        HandlerOptions::default()
            .with_min_level(self.level)
            .with_template(self.template.unwrap_or_default())
            .with_timestamp_format(self.time_format)
            .with_color(self.color)
            .with_attr_format(self.attr_format)
    }
}

impl From<HandlerConfig> for HandlerOptions {
    fn from(config: HandlerConfig) -> Self {
        config.into_options()
    }
}
