//! Attribute formatter implementations
//!
//! A formatter appends the rendered attribute list to a buffer that already
//! holds the rendered header. It must only append, and it owns the line
//! termination of the record.

pub mod basic;
pub mod multiline;
pub mod yaml;

pub use basic::BasicFormatter;
pub use multiline::MultilineFormatter;
pub use yaml::YamlFormatter;

use crate::core::{Attr, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub trait AttrFormatter: Send + Sync {
    fn format(&self, buf: &mut Vec<u8>, attrs: &[Attr]) -> Result<()>;
    fn name(&self) -> &str;
}

/// Built-in formatter selection, usable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrFormat {
    #[default]
    OneLine,
    MultiLine,
    Yaml,
}

impl AttrFormat {
    pub fn formatter(self) -> Arc<dyn AttrFormatter> {
        match self {
            AttrFormat::OneLine => Arc::new(BasicFormatter),
            AttrFormat::MultiLine => Arc::new(MultilineFormatter),
            AttrFormat::Yaml => Arc::new(YamlFormatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_format_selects_strategy() {
        assert_eq!(AttrFormat::default(), AttrFormat::OneLine);
        assert_eq!(AttrFormat::OneLine.formatter().name(), "one_line");
        assert_eq!(AttrFormat::MultiLine.formatter().name(), "multi_line");
        assert_eq!(AttrFormat::Yaml.formatter().name(), "yaml");
    }

    #[test]
    fn test_attr_format_serde() {
        let format: AttrFormat = serde_json::from_str("\"multi_line\"").unwrap();
        assert_eq!(format, AttrFormat::MultiLine);
    }
}
