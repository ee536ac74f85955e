//! Notification seam: fire-and-forget user-facing toasts.
//!
//! Purely advisory — nothing in the core branches on whether a notification
//! was delivered, so a no-op implementation is always valid.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

pub trait Notifier {
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn info(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

/// Routes notifications to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }
    fn success(&self, message: &str) {
        log::info!("{message}");
    }
    fn error(&self, message: &str) {
        log::error!("{message}");
    }
}

/// Records notifications into a shared queue. Cloning shares the queue, so
/// one handle can sit inside the editor while another drains — the wasm
/// bridge feeds the shell's toast system this way, and tests assert on it.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    queue: Rc<RefCell<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded notices, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.queue.borrow_mut().drain(..).collect()
    }

    fn push(&self, level: NoticeLevel, message: &str) {
        self.queue.borrow_mut().push(Notice {
            level,
            message: message.to_string(),
        });
    }
}

impl Notifier for MemoryNotifier {
    fn info(&self, message: &str) {
        self.push(NoticeLevel::Info, message);
    }
    fn success(&self, message: &str) {
        self.push(NoticeLevel::Success, message);
    }
    fn error(&self, message: &str) {
        self.push(NoticeLevel::Error, message);
    }
}
