//! Header template rendering
//!
//! Templates mix literal text with placeholders of the form `{{.Name}}`:
//!
//! | placeholder      | value                               |
//! |------------------|-------------------------------------|
//! | `{{.Timestamp}}` | timestamp in the configured layout  |
//! | `{{.Level}}`     | level name, colored when enabled    |
//! | `{{.Message}}`   | record message                      |
//! | `{{.File}}`      | absolute source path of the call-site |
//! | `{{.FileName}}`  | base name of the source path        |
//! | `{{.Line}}`      | call-site line, `0` when unknown    |
//! | `{{.Function}}`  | call-site function or module path   |
//!
//! Whitespace inside the braces is ignored (`{{ .Level }}`). Rendering never
//! appends a newline; line termination belongs to the attribute formatter.

use super::error::{LoggerError, Result};
use super::fields::LogFields;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Level,
    Message,
    File,
    FileName,
    Line,
    Function,
}

impl Placeholder {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "Timestamp" => Some(Placeholder::Timestamp),
            "Level" => Some(Placeholder::Level),
            "Message" => Some(Placeholder::Message),
            "File" => Some(Placeholder::File),
            "FileName" => Some(Placeholder::FileName),
            "Line" => Some(Placeholder::Line),
            "Function" => Some(Placeholder::Function),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Piece(&'a str),
    Field(Placeholder),
}

/// A parsed template borrowing its literal pieces from the source string
#[derive(Debug, Clone)]
pub struct Template<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(source: &'a str) -> Result<Self> {
        let mut tokens = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                tokens.push(Token::Piece(&rest[..start]));
            }

            let action = &rest[start + OPEN.len()..];
            let end = action
                .find(CLOSE)
                .ok_or_else(|| LoggerError::template(source, "unclosed action"))?;

            let inner = action[..end].trim();
            let name = inner.strip_prefix('.').ok_or_else(|| {
                LoggerError::template(source, format!("expected field reference, found '{}'", inner))
            })?;
            let field = Placeholder::from_name(name).ok_or_else(|| {
                LoggerError::template(source, format!("unknown placeholder '{}'", name))
            })?;
            tokens.push(Token::Field(field));

            rest = &action[end + CLOSE.len()..];
        }

        if !rest.is_empty() {
            tokens.push(Token::Piece(rest));
        }

        Ok(Self { tokens })
    }

    pub fn render(&self, fields: &LogFields, buf: &mut Vec<u8>) {
        for token in &self.tokens {
            match *token {
                Token::Piece(piece) => buf.extend_from_slice(piece.as_bytes()),
                Token::Field(Placeholder::Timestamp) => {
                    buf.extend_from_slice(fields.timestamp.as_bytes())
                }
                Token::Field(Placeholder::Level) => buf.extend_from_slice(fields.level.as_bytes()),
                Token::Field(Placeholder::Message) => {
                    buf.extend_from_slice(fields.message.as_bytes())
                }
                Token::Field(Placeholder::File) => buf.extend_from_slice(fields.file.as_bytes()),
                Token::Field(Placeholder::FileName) => {
                    buf.extend_from_slice(fields.file_name.as_bytes())
                }
                Token::Field(Placeholder::Line) => {
                    buf.extend_from_slice(fields.line.to_string().as_bytes())
                }
                Token::Field(Placeholder::Function) => {
                    buf.extend_from_slice(fields.function.as_bytes())
                }
            }
        }
    }
}

/// Parse `template` and render it into `buf`
///
/// Nothing is appended to `buf` when the template is invalid.
pub fn render(template: &str, fields: &LogFields, buf: &mut Vec<u8>) -> Result<()> {
    Template::parse(template)?.render(fields, buf);
    Ok(())
}
