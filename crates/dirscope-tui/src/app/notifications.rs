//! Transient notification stack.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use dirscope_ops::{Notice, Severity};

use super::constants::MAX_NOTIFICATIONS;

/// A notice together with the moment it was raised.
#[derive(Debug, Clone)]
pub struct Notification {
    pub notice: Notice,
    pub created: Instant,
}

impl Notification {
    pub fn severity(&self) -> Severity {
        self.notice.severity
    }

    pub fn message(&self) -> &str {
        &self.notice.message
    }
}

/// Bounded stack of notifications, newest first.
#[derive(Debug, Clone)]
pub struct Notifications {
    entries: VecDeque<Notification>,
    timeout: Duration,
}

impl Notifications {
    /// Create an empty stack whose entries live for `timeout`.
    pub fn new(timeout: Duration) -> Self {
        Self {
            entries: VecDeque::new(),
            timeout,
        }
    }

    /// Show a notice now.
    pub fn push(&mut self, notice: Notice) {
        self.push_at(notice, Instant::now());
    }

    /// Show a notice raised at `created`. The oldest entry is dropped once
    /// the stack is full.
    pub fn push_at(&mut self, notice: Notice, created: Instant) {
        self.entries.push_front(Notification { notice, created });
        self.entries.truncate(MAX_NOTIFICATIONS);
    }

    /// Drop entries older than the timeout. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        let timeout = self.timeout;
        self.entries
            .retain(|n| now.saturating_duration_since(n.created) < timeout);
        self.entries.len() != before
    }

    /// Dismiss everything. Returns true if anything was visible.
    pub fn clear(&mut self) -> bool {
        let had_any = !self.entries.is_empty();
        self.entries.clear();
        had_any
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }
}
