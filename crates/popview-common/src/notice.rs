use std::collections::VecDeque;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
}

/// A transient, user-visible message. The shell drains these and hands
/// them to the platform notifier; nothing here blocks or persists.
#[derive(Debug, Clone)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn warning(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Bounded FIFO of pending notices. If a burst of navigation failures
/// overflows the capacity, the oldest notice is dropped.
#[derive(Debug)]
pub struct NoticeQueue {
    items: VecDeque<Notice>,
    capacity: usize,
}

impl NoticeQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, notice: Notice) {
        if self.items.len() >= self.capacity {
            self.items.pop_front();
        }
        self.items.push_back(notice);
    }

    /// Take all pending notices, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Notice> {
        self.items.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(16)
    }
}
