use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a toast stays up when the presentation layer auto-hides it.
pub const TOAST_AUTO_HIDE: Duration = Duration::from_millis(3000);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Transient notification for failures outside the form itself, such as a rejected
/// submission.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub open: bool,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: impl Into<String>, variant: ToastVariant) {
        self.message = message.into();
        self.variant = variant;
        self.open = true;
        log::debug!("Toast ({:?}): {}", self.variant, self.message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(message, ToastVariant::Error);
    }

    pub fn hide(&mut self) {
        *self = Self::default();
    }
}
