//! Transient status toasts with auto-dismiss.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(5);

/// Visual flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// One message currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// The toast list plus the id counter behind it.
#[derive(Debug, Default)]
pub struct ToastLog {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastLog {
    /// Append a toast and hand back the id its dismissal will use.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for posting toasts from components and async tasks.
#[derive(Clone, Copy)]
pub struct Toaster {
    log: Signal<ToastLog>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            log: Signal::new(ToastLog::default()),
        }
    }

    /// Toasts currently on screen, oldest first.
    pub fn current(&self) -> Vec<Toast> {
        self.log.read().toasts().to_vec()
    }

    /// Show a toast and schedule its dismissal after [`TOAST_TTL`].
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let mut log = self.log;
        let id = log.write().push(kind, message);
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            log.write().dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }
}
