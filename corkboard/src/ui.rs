//! Interfaces to the front end's notification surface and confirmation
//! modal, plus the implementations the host and tests use.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient user notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Destructive,
            ..Self::new(title, description)
        }
    }
}

/// Placeholder shown by a view with nothing to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub hint: &'static str,
}

/// Fire-and-forget notification sink
pub trait Toaster: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Synchronous yes/no prompt
pub trait Confirm: Send + Sync {
    fn confirm(&self, text: &str) -> bool;
}

/// Collects toasts until the host drains them into a response
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn drain(&self) -> Vec<Toast> {
        let mut toasts = self.toasts.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *toasts)
    }
}

impl Toaster for ToastQueue {
    fn notify(&self, toast: Toast) {
        tracing::debug!("Toast: {} - {}", toast.title, toast.description);
        self.toasts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(toast);
    }
}

/// Always answers the same way
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirm(pub bool);

impl Confirm for FixedConfirm {
    fn confirm(&self, _text: &str) -> bool {
        self.0
    }
}

/// Answer supplied by the host for the command being handled.
/// Resets to "no" after every prompt.
#[derive(Debug, Default)]
pub struct PresetConfirm {
    answer: AtomicBool,
    asked: Mutex<Vec<String>>,
}

impl PresetConfirm {
    pub fn preset(&self, answer: bool) {
        self.answer.store(answer, Ordering::SeqCst);
    }

    /// Prompts raised since the last call
    pub fn take_prompts(&self) -> Vec<String> {
        let mut asked = self.asked.lock().unwrap_or_else(PoisonError::into_inner);
        std::mem::take(&mut *asked)
    }
}

impl Confirm for PresetConfirm {
    fn confirm(&self, text: &str) -> bool {
        self.asked
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
        self.answer.swap(false, Ordering::SeqCst)
    }
}

/// Collaborators shared by every view
#[derive(Clone)]
pub struct Ui {
    pub toaster: Arc<dyn Toaster>,
    pub confirm: Arc<dyn Confirm>,
}

impl Ui {
    pub fn new(toaster: Arc<dyn Toaster>, confirm: Arc<dyn Confirm>) -> Self {
        Self { toaster, confirm }
    }

    pub fn notify(&self, toast: Toast) {
        self.toaster.notify(toast);
    }
}
