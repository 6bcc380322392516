use crate::TabularInput;
use anyhow::Result;
use chrono::Local;
use colored::Color;

/// What is logged.
#[derive(Debug, Clone, Copy)]
pub enum LogPayload<'a> {
    /// A plain text message.
    Message(&'a str),

    /// The metrics of one reporting cycle.
    Tabular(&'a TabularInput),
}

impl<'a> From<&'a str> for LogPayload<'a> {
    fn from(message: &'a str) -> Self {
        LogPayload::Message(message)
    }
}

impl<'a> From<&'a String> for LogPayload<'a> {
    fn from(message: &'a String) -> Self {
        LogPayload::Message(message.as_str())
    }
}

impl<'a> From<&'a TabularInput> for LogPayload<'a> {
    fn from(tabular: &'a TabularInput) -> Self {
        LogPayload::Tabular(tabular)
    }
}

/// How a message is decorated. Ignored for tabular payloads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogOptions {
    /// Prepend the logger's active prefix.
    pub with_prefix: bool,

    /// Prepend a timestamp.
    pub with_timestamp: bool,

    /// Color of the message, for outputs that support colors.
    pub color: Option<Color>,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            with_prefix: true,
            with_timestamp: true,
            color: None,
        }
    }
}

impl LogOptions {
    /// Sets whether the active prefix is prepended.
    pub fn with_prefix(mut self, v: bool) -> Self {
        self.with_prefix = v;
        self
    }

    /// Sets whether a timestamp is prepended.
    pub fn with_timestamp(mut self, v: bool) -> Self {
        self.with_timestamp = v;
        self
    }

    /// Sets the color of the message.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// A destination that renders or persists log payloads.
pub trait LogOutput {
    /// Whether [`LogPayload::Message`] is handled.
    fn supports_text(&self) -> bool {
        true
    }

    /// Whether [`LogPayload::Tabular`] is handled.
    fn supports_tabular(&self) -> bool {
        false
    }

    /// Writes a payload.
    ///
    /// `prefix` is the logger's active prefix, already empty when the caller
    /// disabled [`LogOptions::with_prefix`]. Payloads the output does not
    /// support are ignored.
    fn log(&mut self, payload: &LogPayload<'_>, prefix: &str, options: &LogOptions) -> Result<()>;
}

/// The current local time formatted with `fmt`, a [`chrono::format::strftime`] string.
pub fn timestamp(fmt: &str) -> String {
    Local::now().format(fmt).to_string()
}
