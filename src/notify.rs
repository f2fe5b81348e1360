//! Transient notification banners.

/// Severity, mapped onto the site's alert styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Suffix for the `alert-*` CSS class.
    pub fn alert_class(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Notification {
            level,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

pub type NoticeId = u64;

/// Banners currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationQueue {
    next_id: NoticeId,
    entries: Vec<(NoticeId, Notification)>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) -> NoticeId {
        self.next_id += 1;
        let id = self.next_id;
        log::debug!("notice #{} ({:?}): {}", id, notification.level, notification.message);
        self.entries.push((id, notification));
        id
    }

    /// Returns false when `id` was already gone (closed by hand before the
    /// auto-dismiss timer fired).
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn entries(&self) -> &[(NoticeId, Notification)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dismiss_is_idempotent() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(Notification::success("saved"));
        let b = queue.push(Notification::warning("careful"));
        assert_ne!(a, b);

        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.entries().len(), 1);
        assert_eq!(queue.entries()[0].1.message, "careful");
    }

    #[test]
    fn error_level_uses_danger_style() {
        assert_eq!(NoticeLevel::Error.alert_class(), "danger");
        assert_eq!(Notification::info("x").level.alert_class(), "info");
    }
}
