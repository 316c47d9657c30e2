use std::collections::VecDeque;

use chrono::DateTime;
use chrono::Local;

pub const NOTIFICATION_CAP: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✗",
            Self::Success => "✓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: DateTime<Local>,
}

/// Newest-first queue of at most [`NOTIFICATION_CAP`] entries.
///
/// An incoming `(message, kind)` pair that is already queued is dropped, so
/// repeated producers cannot flood the panel.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    cap: usize,
    next_id: u64,
    buf: VecDeque<Notification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(NOTIFICATION_CAP)
    }
}

impl NotificationQueue {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            next_id: 1,
            buf: VecDeque::with_capacity(cap + 1),
        }
    }

    /// Returns the id of the queued entry, or `None` when it was a duplicate.
    pub fn push(
        &mut self,
        message: impl Into<String>,
        kind: NotificationKind,
        created_at: DateTime<Local>,
    ) -> Option<NotificationId> {
        let message = message.into();
        if self.contains(&message, kind) {
            return None;
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.buf.push_front(Notification {
            id,
            message,
            kind,
            created_at,
        });
        self.buf.truncate(self.cap);
        Some(id)
    }

    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.buf.len();
        self.buf.retain(|notification| notification.id != id);
        self.buf.len() != before
    }

    pub fn contains(&self, message: &str, kind: NotificationKind) -> bool {
        self.buf
            .iter()
            .any(|notification| notification.kind == kind && notification.message == message)
    }

    pub fn position(&self, id: NotificationId) -> Option<usize> {
        self.buf.iter().position(|notification| notification.id == id)
    }

    pub fn get(&self, index: usize) -> Option<&Notification> {
        self.buf.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.buf.iter()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(minute: i64) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Local::now)
            + Duration::minutes(minute)
    }

    #[test]
    fn duplicate_message_and_kind_is_dropped() {
        let mut queue = NotificationQueue::default();
        assert!(queue.push("X", NotificationKind::Info, at(0)).is_some());
        assert!(queue.push("X", NotificationKind::Info, at(1)).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn same_message_with_other_kind_is_kept() {
        let mut queue = NotificationQueue::default();
        queue.push("X", NotificationKind::Info, at(0));
        queue.push("X", NotificationKind::Error, at(1));
        let kinds: Vec<NotificationKind> = queue.iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NotificationKind::Error, NotificationKind::Info]);
    }

    #[test]
    fn sixth_entry_evicts_the_oldest() {
        let mut queue = NotificationQueue::default();
        for (minute, message) in ["a", "b", "c", "d", "e", "f"].into_iter().enumerate() {
            queue.push(message, NotificationKind::Info, at(minute as i64));
        }
        let messages: Vec<&str> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn evicted_message_can_be_queued_again() {
        let mut queue = NotificationQueue::new(2);
        queue.push("a", NotificationKind::Info, at(0));
        queue.push("b", NotificationKind::Info, at(1));
        queue.push("c", NotificationKind::Info, at(2));
        assert!(queue.push("a", NotificationKind::Info, at(3)).is_some());
    }

    #[test]
    fn dismiss_removes_only_the_matching_id() {
        let mut queue = NotificationQueue::default();
        let first = queue.push("a", NotificationKind::Info, at(0));
        let second = queue.push("b", NotificationKind::Info, at(1));
        assert!(queue.dismiss(first.unwrap_or(NotificationId(0))));
        assert!(!queue.dismiss(NotificationId(999)));
        let ids: Vec<NotificationId> = queue.iter().map(|n| n.id).collect();
        assert_eq!(ids, second.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn ids_are_unique_even_within_the_same_instant() {
        let mut queue = NotificationQueue::default();
        let a = queue.push("a", NotificationKind::Info, at(0));
        let b = queue.push("b", NotificationKind::Info, at(0));
        assert_ne!(a, b);
    }
}
