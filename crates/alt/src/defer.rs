//! Scope-exit actions.
//!
//! ```rust
//! use std::cell::Cell;
//! use alt::defer;
//!
//! let closed = Cell::new(false);
//! {
//!     defer!(closed.set(true));
//!     assert!(!closed.get());
//! }
//! assert!(closed.get());
//! ```

/// Runs a closure when dropped.
#[must_use = "the action runs as soon as the guard is dropped"]
pub struct Defer<F: FnOnce()> {
    action: Option<F>,
}

impl<F: FnOnce()> Defer<F> {
    pub fn new(action: F) -> Self {
        Self {
            action: Some(action),
        }
    }

    /// Disarms the guard so the action never runs.
    pub fn cancel(mut self) {
        self.action = None;
    }
}

impl<F: FnOnce()> Drop for Defer<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}

/// Runs the given statements when the enclosing scope ends.
///
/// Guards in the same scope run in reverse order of declaration.
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer_guard = $crate::Defer::new(|| {
            $($body)*;
        });
    };
}
