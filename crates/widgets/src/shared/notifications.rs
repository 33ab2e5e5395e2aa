use std::sync::{Arc, Mutex};

use serde::Serialize;

/// Severity of a transient toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    Error,
    Warning,
    Success,
}

/// Transient toast-style notification surfaced to the hosting page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Error,
        }
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Warning,
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Success,
        }
    }
}

/// Callback a widget invokes for every user-visible notification. The host
/// decides how to render it.
pub type NotificationSink = Arc<dyn Fn(Toast) + Send + Sync>;

/// Sink that records every toast, for assertions and embedding hosts that
/// drain notifications on their own schedule.
#[derive(Clone, Default)]
pub struct ToastCollector {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl ToastCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sink(&self) -> NotificationSink {
        let toasts = Arc::clone(&self.toasts);
        Arc::new(move |toast| toasts.lock().unwrap().push(toast))
    }

    pub fn collected(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}
