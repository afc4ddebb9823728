use std::{
    collections::VecDeque,
    time::{Duration, Instant},
};

pub const TOAST_TTL: Duration = Duration::from_secs(5);
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Toast {
    notification: Notification,
    expires_at: Instant,
}

/// Short-lived notifications shown in a corner of the page.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
    capacity: usize,
}

impl ToastQueue {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            toasts: VecDeque::new(),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, notification: Notification, now: Instant) {
        tracing::debug!(title = %notification.title, kind = ?notification.kind, "toast queued");
        self.toasts.push_back(Toast {
            notification,
            expires_at: now + self.ttl,
        });
        while self.toasts.len() > self.capacity {
            self.toasts.pop_front();
        }
    }

    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn dismiss(&mut self, index: usize) {
        self.toasts.remove(index);
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter().map(|toast| &toast.notification)
    }

    pub fn next_expiry(&self, now: Instant) -> Option<Duration> {
        self.toasts
            .iter()
            .map(|toast| toast.expires_at.saturating_duration_since(now))
            .min()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_TTL, MAX_VISIBLE_TOASTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_ttl() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        queue.push(Notification::info("a", ""), now);
        queue.prune(now + Duration::from_secs(4));
        assert_eq!(queue.visible().count(), 1);
        queue.prune(now + TOAST_TTL);
        assert!(queue.is_empty());
    }

    #[test]
    fn drops_oldest_beyond_capacity() {
        let now = Instant::now();
        let mut queue = ToastQueue::new(TOAST_TTL, 2);
        for title in ["one", "two", "three"] {
            queue.push(Notification::success(title, ""), now);
        }
        let titles: Vec<_> = queue.visible().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["two", "three"]);
    }

    #[test]
    fn next_expiry_is_soonest_toast() {
        let now = Instant::now();
        let mut queue = ToastQueue::default();
        queue.push(Notification::error("late", ""), now + Duration::from_secs(2));
        queue.push(Notification::error("early", ""), now);
        assert_eq!(queue.next_expiry(now), Some(TOAST_TTL));
        queue.dismiss(1);
        assert_eq!(
            queue.next_expiry(now),
            Some(TOAST_TTL + Duration::from_secs(2))
        );
    }
}
