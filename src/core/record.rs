//! Log record structure
//!
//! The record is the unit handed to [`Handler::handle`](crate::Handler::handle):
//! level, message and timestamp are already resolved, the call-site is
//! optional and attributes are kept in emission order.

use super::attribute::{Attr, AttrValue};
use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use std::path::{Component, Path, PathBuf};

/// Where a record was emitted from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    pub function: String,
}

impl CallSite {
    pub fn new(file: impl Into<String>, line: u32, function: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
        }
    }

    /// Call-site whose `file` is resolved against the emitting crate's
    /// manifest directory.
    ///
    /// `file!()` is relative to the crate root, or to the workspace root for
    /// workspace members. In the latter case the path already begins with the
    /// member's directory, so the overlap with the end of `manifest_dir` is
    /// dropped before joining. Absolute paths are kept as they are.
    pub fn in_crate(manifest_dir: &str, file: &str, line: u32, function: &str) -> Self {
        Self::new(resolve_source_path(manifest_dir, file), line, function)
    }

    /// Last path component of `file`
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }
}

fn resolve_source_path(manifest_dir: &str, file: &str) -> String {
    let rel = Path::new(file);
    if rel.is_absolute() || manifest_dir.is_empty() {
        return file.to_string();
    }

    let base: Vec<Component<'_>> = Path::new(manifest_dir).components().collect();
    let tail: Vec<Component<'_>> = rel.components().collect();
    let overlap = (1..=base.len().min(tail.len().saturating_sub(1)))
        .rev()
        .find(|&k| base[base.len() - k..] == tail[..k])
        .unwrap_or(0);

    let mut path: PathBuf = base.iter().collect();
    path.extend(&tail[overlap..]);
    path.to_string_lossy().into_owned()
}

#[derive(Debug, Clone)]
pub struct Record {
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub call_site: Option<CallSite>,
    attrs: Vec<Attr>,
}

impl Record {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: Utc::now(),
            call_site: None,
            attrs: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    /// Append a key/value attribute
    #[must_use]
    pub fn attr<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.attrs.push(Attr::new(key, value));
        self
    }

    /// Append already-built attributes, preserving their order
    #[must_use]
    pub fn with_attrs<I>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = Attr>,
    {
        self.attrs.extend(attrs);
        self
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}
