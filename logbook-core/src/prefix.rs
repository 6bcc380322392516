//! Nested string prefixes shared by [`TabularInput`](crate::TabularInput) and
//! [`Logger`](crate::Logger).
use crate::error::LogbookError;
use log::warn;
use std::ops::{Deref, DerefMut};

/// Ordered sequence of prefix segments.
///
/// The active prefix is the concatenation of all segments in push order.
#[derive(Debug, Default, Clone)]
pub struct PrefixStack {
    segments: Vec<String>,
    joined: String,
}

impl PrefixStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a segment.
    pub fn push(&mut self, segment: impl Into<String>) {
        self.segments.push(segment.into());
        self.joined = self.segments.concat();
    }

    /// Pops the last segment.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::PrefixUnderflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<String, LogbookError> {
        let segment = self.segments.pop().ok_or(LogbookError::PrefixUnderflow)?;
        self.joined = self.segments.concat();
        Ok(segment)
    }

    /// Drops the segments above `depth`. Does nothing if the stack is not
    /// deeper than `depth`.
    pub fn truncate(&mut self, depth: usize) {
        if depth < self.segments.len() {
            self.segments.truncate(depth);
            self.joined = self.segments.concat();
        }
    }

    /// The concatenation of all segments.
    pub fn as_str(&self) -> &str {
        &self.joined
    }

    /// Number of pushed segments.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if no segment is pushed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Types owning a [`PrefixStack`], which can hand out [`PrefixGuard`]s.
pub trait Prefixed {
    /// Mutable access to the prefix stack.
    fn prefix_stack_mut(&mut self) -> &mut PrefixStack;
}

/// Scoped prefix.
///
/// Pushes a segment on construction and pops it when dropped, so the pop runs
/// on every exit path of the scope. On drop the stack is cut back to the depth
/// it had before the push; segments pushed by outer scopes are never removed,
/// even if the scope popped more than it pushed. The guard dereferences to its owner, which
/// makes nested scopes look like this:
///
/// ```rust
/// use logbook_core::TabularInput;
///
/// let mut tabular = TabularInput::new();
/// {
///     let mut outer = tabular.prefix("A:");
///     let mut inner = outer.prefix("B:");
///     inner.record("x", 1);
/// }
/// assert!(tabular.get("A:B:x").is_some());
/// assert_eq!(tabular.prefix_str(), "");
/// ```
pub struct PrefixGuard<'a, T: Prefixed> {
    owner: &'a mut T,
    depth: usize,
}

impl<'a, T: Prefixed> PrefixGuard<'a, T> {
    /// Pushes `segment` onto the owner's stack.
    pub fn new(owner: &'a mut T, segment: impl Into<String>) -> Self {
        let stack = owner.prefix_stack_mut();
        stack.push(segment);
        let depth = stack.depth();
        Self { owner, depth }
    }
}

impl<'a, T: Prefixed> Deref for PrefixGuard<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.owner
    }
}

impl<'a, T: Prefixed> DerefMut for PrefixGuard<'a, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.owner
    }
}

impl<'a, T: Prefixed> Drop for PrefixGuard<'a, T> {
    fn drop(&mut self) {
        let stack = self.owner.prefix_stack_mut();
        if stack.depth() < self.depth {
            warn!(
                "Prefix pushed at depth {} was already popped (stack is {:?})",
                self.depth,
                stack.as_str()
            );
            return;
        }
        if stack.depth() > self.depth {
            warn!(
                "{} prefix segment(s) left inside a scoped prefix are dropped",
                stack.depth() - self.depth
            );
        }
        stack.truncate(self.depth - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Owner(PrefixStack);

    impl Prefixed for Owner {
        fn prefix_stack_mut(&mut self) -> &mut PrefixStack {
            &mut self.0
        }
    }

    #[test]
    fn test_push_pop_concatenates_in_order() {
        let mut stack = PrefixStack::new();
        stack.push("A:");
        stack.push("B:");
        assert_eq!(stack.as_str(), "A:B:");
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), Ok("B:".to_string()));
        assert_eq!(stack.as_str(), "A:");
    }

    #[test]
    fn test_pop_empty_is_an_error() {
        let mut stack = PrefixStack::new();
        assert_eq!(stack.pop(), Err(LogbookError::PrefixUnderflow));
    }

    #[test]
    fn test_guard_pops_on_early_return() {
        fn inner(owner: &mut Owner, fail: bool) -> Result<(), LogbookError> {
            let mut guard = PrefixGuard::new(owner, "scope/");
            assert_eq!(guard.0.as_str(), "scope/");
            if fail {
                return Err(LogbookError::PrefixUnderflow);
            }
            guard.0.push("inner/");
            guard.0.pop()?;
            Ok(())
        }

        let mut owner = Owner::default();
        assert!(inner(&mut owner, true).is_err());
        assert!(owner.0.is_empty());
        assert!(inner(&mut owner, false).is_ok());
        assert!(owner.0.is_empty());
    }

    #[test]
    fn test_guard_never_pops_outer_segments() {
        let mut owner = Owner::default();
        owner.0.push("root/");
        {
            let mut outer = PrefixGuard::new(&mut owner, "A:");
            {
                let mut inner = PrefixGuard::new(&mut *outer, "B:");
                assert_eq!(inner.0.pop(), Ok("B:".to_string()));
            }
            assert_eq!(outer.0.as_str(), "root/A:");
        }
        assert_eq!(owner.0.as_str(), "root/");
        assert_eq!(owner.0.pop(), Ok("root/".to_string()));
        assert!(owner.0.is_empty());
    }

    #[test]
    fn test_guard_drops_segments_left_inside_scope() {
        let mut owner = Owner::default();
        owner.0.push("root/");
        {
            let mut guard = PrefixGuard::new(&mut owner, "A:");
            guard.0.push("leftover/");
        }
        assert_eq!(owner.0.as_str(), "root/");
        assert_eq!(owner.0.depth(), 1);
    }

    #[test]
    fn test_guard_pops_on_panic() {
        let mut owner = Owner::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = PrefixGuard::new(&mut owner, "p");
            panic!("boom");
        }));
        assert!(result.is_err());
        assert!(owner.0.is_empty());
    }
}
