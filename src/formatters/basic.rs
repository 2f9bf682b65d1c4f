//! One-line `key=value` formatter

use super::AttrFormatter;
use crate::core::attribute::write_joined;
use crate::core::{Attr, LoggerError, Result};

/// Renders attributes on the header line: ` a=1 group=[b=2 c=3]\n`
///
/// A list that is empty, or holds only zero attributes, yields a bare `\n`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicFormatter;

impl AttrFormatter for BasicFormatter {
    fn format(&self, buf: &mut Vec<u8>, attrs: &[Attr]) -> Result<()> {
        if attrs.iter().all(Attr::is_empty) {
            buf.push(b'\n');
            return Ok(());
        }

        let mut line = String::from(" ");
        write_joined(&mut line, attrs)
            .map_err(|_| LoggerError::formatter("one_line", "attribute rendering failed"))?;
        line.push('\n');

        buf.extend_from_slice(line.as_bytes());
        Ok(())
    }

    fn name(&self) -> &str {
        "one_line"
    }
}
