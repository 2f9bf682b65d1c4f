//! Top-level fields substituted into the header template

use super::error::Result;
use super::record::Record;
use super::timestamp::TimestampFormat;

/// Values available to template placeholders
///
/// Call-site fields stay empty (line `0`) when the record has no call-site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFields {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub file: String,
    pub file_name: String,
    pub line: u32,
    pub function: String,
}

impl LogFields {
    pub fn from_record(record: &Record, time_format: &TimestampFormat) -> Result<Self> {
        let mut fields = Self {
            timestamp: time_format.format(&record.timestamp)?,
            level: record.level.to_str().to_string(),
            message: record.message.clone(),
            ..Self::default()
        };

        if let Some(ref site) = record.call_site {
            fields.file = site.file.clone();
            fields.file_name = site.file_name().to_string();
            fields.line = site.line;
            fields.function = site.function.clone();
        }

        Ok(fields)
    }
}
