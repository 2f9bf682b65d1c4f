//! Record handler
//!
//! A [`Handler`] gates records by level, assembles the final attribute list,
//! renders the header template and the attributes into a private buffer, and
//! writes the buffer to the shared sink in one locked write.
//!
//! `with_attrs` and `with_group` derive new handlers. A derived handler shares
//! the options and the sink with its parent but owns its attribute list and
//! group name, so the parent is never affected.

use super::{
    attribute::Attr,
    error::Result,
    fields::LogFields,
    log_level::LogLevel,
    options::HandlerOptions,
    record::Record,
    sink::SharedSink,
    template,
};
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Handler {
    options: Arc<HandlerOptions>,
    sink: SharedSink,
    attrs: Vec<Attr>,
    group: Option<String>,
}

impl Handler {
    pub fn new<W: Write + Send + 'static>(writer: W, options: HandlerOptions) -> Self {
        Self::with_sink(SharedSink::new(writer), options)
    }

    /// Build a root handler on an existing shared sink
    pub fn with_sink(sink: SharedSink, options: HandlerOptions) -> Self {
        Self {
            options: Arc::new(options),
            sink,
            attrs: Vec::new(),
            group: None,
        }
    }

    /// Whether records at `level` would be emitted.
    ///
    /// Callers check this before building a record; `handle` does not.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.options.min_level
    }

    /// Render `record` and write it to the sink.
    ///
    /// On a template, time layout or formatter error nothing is written.
    pub fn handle(&self, record: &Record) -> Result<()> {
        let mut fields = LogFields::from_record(record, &self.options.timestamp_format)?;
        if self.options.enable_color {
            fields.level = record.level.colored();
        }

        let attrs = self.assemble(record);

        let mut buf = Vec::with_capacity(128);
        template::render(&self.options.template, &fields, &mut buf)?;
        self.options.attr_formatter.format(&mut buf, &attrs)?;

        self.sink.write_record(&buf)
    }

    /// Final attribute list for `record`: handler attributes followed by the
    /// record's own, wrapped in a single group attribute when a group is active.
    pub fn assemble(&self, record: &Record) -> Vec<Attr> {
        let mut attrs = Vec::with_capacity(self.attrs.len() + record.num_attrs());
        attrs.extend_from_slice(&self.attrs);
        attrs.extend_from_slice(record.attrs());

        match self.group {
            Some(ref name) => vec![Attr::group(name.clone(), attrs)],
            None => attrs,
        }
    }

    /// Derive a handler that adds `attrs` to every record.
    #[must_use]
    pub fn with_attrs<I>(&self, attrs: I) -> Self
    where
        I: IntoIterator<Item = Attr>,
    {
        let mut derived = self.clone();
        derived.attrs.extend(attrs);
        derived
    }

    /// Derive a handler whose records are wrapped in group `name`.
    ///
    /// Replaces any group already active on this handler. An empty name
    /// leaves the current group in place.
    #[must_use]
    pub fn with_group(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut derived = self.clone();
        if !name.is_empty() {
            derived.group = Some(name);
        }
        derived
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.flush()
    }

    pub fn options(&self) -> &HandlerOptions {
        &self.options
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    pub fn sink(&self) -> &SharedSink {
        &self.sink
    }
}
