//! Dispatches messages and tables to a list of outputs.
use crate::{
    error::LogbookError,
    output::{LogOptions, LogOutput, LogPayload},
    prefix::{PrefixGuard, PrefixStack, Prefixed},
    TabularInput,
};
use anyhow::Result;

/// Owns a list of [`LogOutput`]s and a nested message prefix.
///
/// ```rust
/// use logbook_core::{Logger, StdOutput};
///
/// let mut logger = Logger::new();
/// logger.add_output(Box::new(StdOutput::new()));
/// {
///     let mut logger = logger.prefix("itr #3 | ");
///     logger.log_text("Optimizing policy...").unwrap();
/// }
/// ```
#[derive(Default)]
pub struct Logger {
    outputs: Vec<Box<dyn LogOutput>>,
    prefixes: PrefixStack,
}

impl Logger {
    /// Creates a logger without outputs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sends `payload` to every output supporting it.
    ///
    /// Messages get the active prefix when [`LogOptions::with_prefix`] is set.
    /// Stops at the first output that fails.
    pub fn log<'a>(&mut self, payload: impl Into<LogPayload<'a>>, options: &LogOptions) -> Result<()> {
        let payload = payload.into();
        let prefix = if options.with_prefix {
            self.prefixes.as_str()
        } else {
            ""
        };

        for output in self.outputs.iter_mut() {
            let supported = match payload {
                LogPayload::Message(_) => output.supports_text(),
                LogPayload::Tabular(_) => output.supports_tabular(),
            };
            if supported {
                output.log(&payload, prefix, options)?;
            }
        }
        Ok(())
    }

    /// Logs a message with default options.
    pub fn log_text(&mut self, message: &str) -> Result<()> {
        self.log(message, &LogOptions::default())
    }

    /// Logs a table with default options.
    pub fn log_tabular(&mut self, tabular: &TabularInput) -> Result<()> {
        self.log(tabular, &LogOptions::default())
    }

    /// Adds an output.
    pub fn add_output(&mut self, output: Box<dyn LogOutput>) {
        self.outputs.push(output);
    }

    /// Removes all outputs.
    pub fn reset_output(&mut self) {
        self.outputs.clear();
    }

    /// Number of outputs.
    pub fn n_outputs(&self) -> usize {
        self.outputs.len()
    }

    /// Pushes `key` onto the prefix stack until the returned guard is dropped.
    pub fn prefix(&mut self, key: impl Into<String>) -> PrefixGuard<'_, Self> {
        PrefixGuard::new(self, key)
    }

    /// Pushes `key` onto the prefix stack.
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
}

impl Prefixed for Logger {
    fn prefix_stack_mut(&mut self) -> &mut PrefixStack {
        &mut self.prefixes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    /// Keeps rendered payloads in a shared buffer.
    struct CaptureOutput {
        lines: Rc<RefCell<Vec<String>>>,
        tabular: bool,
    }

    impl LogOutput for CaptureOutput {
        fn supports_tabular(&self) -> bool {
            self.tabular
        }

        fn log(&mut self, payload: &LogPayload<'_>, prefix: &str, _options: &LogOptions) -> Result<()> {
            let line = match payload {
                LogPayload::Message(m) => format!("{}{}", prefix, m),
                LogPayload::Tabular(t) => format!("table:{}", t.len()),
            };
            self.lines.borrow_mut().push(line);
            Ok(())
        }
    }

    fn capture(tabular: bool) -> (Box<dyn LogOutput>, Rc<RefCell<Vec<String>>>) {
        let lines = Rc::new(RefCell::new(vec![]));
        let output = CaptureOutput {
            lines: lines.clone(),
            tabular,
        };
        (Box::new(output), lines)
    }

    #[test]
    fn test_nested_prefix_is_applied() -> Result<()> {
        let (output, lines) = capture(false);
        let mut logger = Logger::new();
        logger.add_output(output);
        {
            let mut a = logger.prefix("A:");
            let mut b = a.prefix("B:");
            b.log_text("msg")?;
            b.log("raw", &LogOptions::default().with_prefix(false))?;
        }
        logger.log_text("after")?;

        assert_eq!(*lines.borrow(), vec!["A:B:msg", "raw", "after"]);
        assert_eq!(logger.prefix_str(), "");
        Ok(())
    }

    #[test]
    fn test_tabular_only_reaches_supporting_outputs() -> Result<()> {
        let (text_only, text_lines) = capture(false);
        let (with_table, table_lines) = capture(true);
        let mut logger = Logger::new();
        logger.add_output(text_only);
        logger.add_output(with_table);

        let mut tabular = TabularInput::new();
        tabular.record("a", 1);
        tabular.record("b", 2);
        logger.log_tabular(&tabular)?;

        assert!(text_lines.borrow().is_empty());
        assert_eq!(*table_lines.borrow(), vec!["table:2"]);
        Ok(())
    }

    #[test]
    fn test_reset_output() -> Result<()> {
        let (output, lines) = capture(true);
        let mut logger = Logger::new();
        logger.add_output(output);
        logger.reset_output();
        assert_eq!(logger.n_outputs(), 0);
        logger.log_text("dropped")?;
        assert!(lines.borrow().is_empty());
        Ok(())
    }

    #[test]
    fn test_pop_without_push() {
        let mut logger = Logger::new();
        logger.push_prefix("x");
        assert!(logger.pop_prefix().is_ok());
        assert_eq!(logger.pop_prefix(), Err(LogbookError::PrefixUnderflow));
    }
}
