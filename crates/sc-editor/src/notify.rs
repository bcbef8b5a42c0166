//! Toast notification seam.
//!
//! User-visible operations (delete, duplicate, undo, redo, paste,
//! lock/unlock, show/hide) report a short message here. Fire-and-forget:
//! the core never reads anything back.

/// Callback interface the host UI implements to surface toasts.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Default notifier that drops every message.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str) {}
}
