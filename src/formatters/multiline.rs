//! One attribute per line

use super::AttrFormatter;
use crate::core::{Attr, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct MultilineFormatter;

impl AttrFormatter for MultilineFormatter {
    fn format(&self, buf: &mut Vec<u8>, attrs: &[Attr]) -> Result<()> {
        buf.push(b'\n');
        for attr in attrs.iter().filter(|a| !a.is_empty()) {
            buf.extend_from_slice(attr.to_string().as_bytes());
            buf.push(b'\n');
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "multi_line"
    }
}
