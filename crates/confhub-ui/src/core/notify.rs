//! User-visible notifications (toasts).
//!
//! # Design
//! - Controllers describe notices by translation key; the app shell renders the copy.
//! - The queue is bounded so a burst of failures cannot flood the screen.

use crate::i18n::TranslationBundle;
use std::rc::Rc;
use yew::Reducible;

/// Maximum number of toasts kept on screen.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Toast severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

/// Request to show a notification, described by translation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity classification.
    pub kind: ToastKind,
    /// Translation key for the message.
    pub key: &'static str,
    /// English copy used when the key is missing from every bundle.
    pub fallback: &'static str,
}

impl Notice {
    /// Success notice.
    #[must_use]
    pub const fn success(key: &'static str, fallback: &'static str) -> Self {
        Self {
            kind: ToastKind::Success,
            key,
            fallback,
        }
    }

    /// Error notice.
    #[must_use]
    pub const fn error(key: &'static str, fallback: &'static str) -> Self {
        Self {
            kind: ToastKind::Error,
            key,
            fallback,
        }
    }

    /// Resolve the message in the given bundle.
    #[must_use]
    pub fn message(&self, bundle: &TranslationBundle) -> String {
        bundle.text(self.key, self.fallback)
    }
}

/// Toast payload used by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Bounded, ordered list of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    last_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast, evicting the oldest beyond [`MAX_VISIBLE_TOASTS`]. Returns its id.
    pub fn push(&mut self, kind: ToastKind, message: String) -> u64 {
        self.last_id += 1;
        let id = self.last_id;
        self.items.push(Toast { id, message, kind });
        if self.items.len() > MAX_VISIBLE_TOASTS {
            let drain = self.items.len() - MAX_VISIBLE_TOASTS;
            self.items.drain(0..drain);
        }
        id
    }

    /// Remove a toast by id.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }

    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

/// Reducer input for the toast queue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Show a toast with resolved copy.
    Push(ToastKind, String),
    /// Hide a toast by id.
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(kind, message) => {
                next.push(kind, message);
            }
            ToastAction::Dismiss(id) => {
                if next.items.iter().all(|toast| toast.id != id) {
                    return self;
                }
                next.dismiss(id);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleCode, TranslationBundle};

    #[test]
    fn queue_ids_are_monotonic_and_bounded() {
        let mut queue = ToastQueue::default();
        let ids: Vec<u64> = (0..6)
            .map(|idx| queue.push(ToastKind::Success, format!("toast {idx}")))
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(queue.items().len(), MAX_VISIBLE_TOASTS);
        assert_eq!(queue.items()[0].id, 3);
    }

    #[test]
    fn dismiss_removes_only_matching_toast() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Success, "saved".to_string());
        let second = queue.push(ToastKind::Error, "failed".to_string());
        queue.dismiss(first);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].id, second);
        queue.dismiss(99);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn reducer_pushes_and_ignores_unknown_dismissals() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(ToastKind::Success, "saved".to_string()));
        assert_eq!(queue.items().len(), 1);
        let same = Rc::clone(&queue).reduce(ToastAction::Dismiss(42));
        assert!(Rc::ptr_eq(&queue, &same));
        let cleared = queue.reduce(ToastAction::Dismiss(1));
        assert!(cleared.items().is_empty());
    }

    #[test]
    fn notice_message_uses_bundle_then_fallback() {
        let bundle = TranslationBundle::new(LocaleCode::En);
        let known = Notice::success("camera_ready.save_success", "unused");
        assert_eq!(known.message(&bundle), "Save Submission Settings Successfully.");
        let unknown = Notice::error("missing.key", "Fallback copy");
        assert_eq!(unknown.message(&bundle), "Fallback copy");
    }
}
