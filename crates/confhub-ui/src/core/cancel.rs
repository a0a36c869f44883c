//! Cooperative cancellation for in-flight requests.
//!
//! # Design
//! - A token is shared by the view that owns a request and the task awaiting it.
//! - Transports register hooks (e.g. `AbortController::abort`) that fire once on cancel.
//! - Tasks re-check the flag after every await before touching view state.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type CancelHook = Box<dyn FnOnce()>;

#[derive(Default)]
struct CancelInner {
    cancelled: Cell<bool>,
    hooks: RefCell<Vec<CancelHook>>,
}

/// Shared cancellation flag with one-shot hooks.
#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<CancelInner>,
}

impl CancelToken {
    /// Create a fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`CancelToken::cancel`] has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Cancel the token and run registered hooks. Repeated calls are no-ops.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = self.inner.hooks.take();
        for hook in hooks {
            hook();
        }
    }

    /// Register a hook to run on cancellation; runs immediately if already cancelled.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
        } else {
            self.inner.hooks.borrow_mut().push(Box::new(hook));
        }
    }
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .field("hooks", &self.inner.hooks.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::CancelToken;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn cancel_is_visible_through_clones() {
        let token = CancelToken::new();
        let task_view = token.clone();
        assert!(!task_view.is_cancelled());
        token.cancel();
        assert!(task_view.is_cancelled());
    }

    #[test]
    fn hooks_fire_once() {
        let token = CancelToken::new();
        let fired = Rc::new(Cell::new(0));
        {
            let fired = Rc::clone(&fired);
            token.on_cancel(move || fired.set(fired.get() + 1));
        }
        token.cancel();
        token.cancel();
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn late_hooks_run_immediately() {
        let token = CancelToken::new();
        token.cancel();
        let fired = Rc::new(Cell::new(false));
        {
            let fired = Rc::clone(&fired);
            token.on_cancel(move || fired.set(true));
        }
        assert!(fired.get());
    }
}
