//! Timestamp formatting utilities
//!
//! Provides the time layouts used for the `{{.Timestamp}}` placeholder.
//! Supports a plain date-time layout, ISO 8601, RFC 3339, Unix timestamps,
//! and custom strftime formats.

use super::error::{LoggerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Time layout options
///
/// # Examples
///
/// ```
/// use rust_log_renderer::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::DateTime.format(&at).unwrap(), "2025-01-08 10:30:45");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// Date and time separated by a space: `2025-01-08 10:30:45`
    #[default]
    DateTime,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Unix timestamp in microseconds: `1736332245123456`
    UnixMicros,

    /// Custom strftime format
    ///
    /// ```
    /// use rust_log_renderer::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this layout
    ///
    /// Fails when a custom layout contains an unknown specifier.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        let pattern = match self {
            TimestampFormat::DateTime => "%Y-%m-%d %H:%M:%S",
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3fZ",
            TimestampFormat::Iso8601Micros => "%Y-%m-%dT%H:%M:%S%.6fZ",
            TimestampFormat::Rfc3339 => return Ok(datetime.to_rfc3339()),
            TimestampFormat::Unix => return Ok(datetime.timestamp().to_string()),
            TimestampFormat::UnixMillis => return Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::UnixMicros => return Ok(datetime.timestamp_micros().to_string()),
            TimestampFormat::Custom(format_str) => format_str.as_str(),
        };

        // DelayedFormat reports bad specifiers through fmt::Error; to_string() would panic
        let mut out = String::new();
        write!(out, "{}", datetime.format(pattern)).map_err(|_| {
            LoggerError::formatter("timestamp", format!("invalid time layout '{}'", pattern))
        })?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_default_is_date_time() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::DateTime);
        let result = TimestampFormat::default().format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08 10:30:45");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");

        let result = TimestampFormat::Iso8601Micros.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix millis timestamp");
        let micros: i64 = TimestampFormat::UnixMicros
            .format(&fixed_datetime())
            .unwrap()
            .parse()
            .expect("valid unix micros timestamp");

        assert_eq!(secs, 1736332245);
        assert_eq!(millis, 1736332245123);
        assert_eq!(micros, 1736332245123456);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_format_is_an_error() {
        let format = TimestampFormat::Custom("%Y-%".to_string());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::FormatterError { .. }));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&TimestampFormat::Iso8601).expect("serialize");
        assert_eq!(json, "\"iso8601\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"custom":"%Y-%m-%d"}"#).expect("deserialize custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
