//! Outbound player notifications.
//!
//! The engine emits at most one notification per intent and never reads
//! anything back from the collaborator.

use super::constants::MAX_RECENT_NOTIFICATIONS;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}

/// Receives notifications. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Keeps the most recent notifications, newest first.
#[derive(Debug, Clone)]
pub struct NotificationLog {
    entries: VecDeque<Notification>,
    capacity: usize,
}

impl Default for NotificationLog {
    fn default() -> Self {
        Self::new(MAX_RECENT_NOTIFICATIONS)
    }
}

impl NotificationLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Notifier for NotificationLog {
    fn notify(&mut self, notification: Notification) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(notification);
    }
}

/// Forwards notifications to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => tracing::warn!("{}", notification.message),
            NotificationLevel::Success | NotificationLevel::Info => {
                tracing::info!("{}", notification.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_keeps_newest_first() {
        let mut log = NotificationLog::new(2);
        log.notify(Notification::info("one"));
        log.notify(Notification::success("two"));
        log.notify(Notification::error("three"));

        assert_eq!(log.len(), 2);
        assert_eq!(log.latest().unwrap().message, "three");
        let messages: Vec<_> = log.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["three", "two"]);
    }

    #[test]
    fn test_constructors_set_level() {
        assert_eq!(Notification::success("x").level, NotificationLevel::Success);
        assert_eq!(Notification::error("x").level, NotificationLevel::Error);
        assert_eq!(Notification::info("x").level, NotificationLevel::Info);
    }
}
