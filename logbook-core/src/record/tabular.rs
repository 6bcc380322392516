use super::{Placement, Statistics};
use crate::{
    error::LogbookError,
    prefix::{PrefixGuard, PrefixStack, Prefixed},
};
use comfy_table::{presets::ASCII_HORIZONTAL_ONLY, Table};
use std::{
    collections::{HashMap, HashSet},
    fmt,
};

/// Key-value metrics of one reporting cycle.
///
/// Rows keep insertion order, which is also the rendering order.
#[derive(Debug, Default)]
pub struct TabularInput {
    rows: Vec<(String, String)>,
    prefixes: PrefixStack,
}

impl TabularInput {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under the active prefix followed by `key`.
    ///
    /// If the prefixed key is already in the table, its value is replaced in place.
    pub fn record(&mut self, key: impl AsRef<str>, value: impl fmt::Display) {
        let key = format!("{}{}", self.prefixes.as_str(), key.as_ref());
        let value = value.to_string();
        match self.rows.iter_mut().find(|(k, _)| *k == key) {
            Some(row) => row.1 = value,
            None => self.rows.push((key, value)),
        }
    }

    /// Records Average, Std, Median, Min and Max of `values`.
    ///
    /// The labels are joined to `key` according to `placement`. An empty
    /// `values` records `NaN` for all of them.
    pub fn record_misc_stat(&mut self, key: impl AsRef<str>, values: &[f64], placement: Placement) {
        let key = key.as_ref();
        for (stat, value) in Statistics::of(values).labelled().iter() {
            self.record(placement.label(stat, key), value);
        }
    }

    /// Pushes `key` onto the prefix stack until the returned guard is dropped.
    pub fn prefix(&mut self, key: impl Into<String>) -> PrefixGuard<'_, Self> {
        PrefixGuard::new(self, key)
    }

    /// Pushes `key` onto the prefix stack.
    ///
    /// Prefer [`TabularInput::prefix`], which pops automatically.
    pub fn push_prefix(&mut self, key: impl Into<String>) {
        self.prefixes.push(key);
    }

    /// Pops the last pushed prefix.
    pub fn pop_prefix(&mut self) -> Result<String, LogbookError> {
        self.prefixes.pop()
    }

    /// The active prefix.
    pub fn prefix_str(&self) -> &str {
        self.prefixes.as_str()
    }

    /// Removes all rows. The prefix stack is untouched.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Gets the value recorded for a (prefixed) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(k, _)| k.as_str())
    }

    /// Key-value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The table as a key-value map.
    pub fn as_map(&self) -> HashMap<String, String> {
        self.rows.iter().cloned().collect()
    }

    /// The set of keys in the table.
    pub fn key_set(&self) -> HashSet<String> {
        self.rows.iter().map(|(k, _)| k.clone()).collect()
    }
}

impl Prefixed for TabularInput {
    fn prefix_stack_mut(&mut self) -> &mut PrefixStack {
        &mut self.prefixes
    }
}

impl fmt::Display for TabularInput {
    /// Renders an aligned two-column table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return Ok(());
        }
        let mut table = Table::new();
        table.load_preset(ASCII_HORIZONTAL_ONLY);
        for (k, v) in self.rows.iter() {
            table.add_row([k.as_str(), v.as_str()]);
        }
        write!(f, "{}", table)
    }
}
