//! Testimonial carousel: a wrapping index over a fixed list plus an
//! auto-advance timer.

use std::time::{Duration, Instant};

use crate::{error::SiteError, lifecycle::Lifecycle};

pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(6);
pub const DEFAULT_WINDOW: usize = 3;

#[derive(Debug, Clone)]
pub struct Carousel<'a, T> {
    items: &'a [T],
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSlot<'a, T> {
    pub item: &'a T,
    /// Index of `item` in the underlying list.
    pub position: usize,
    pub emphasized: bool,
}

impl<'a, T> Carousel<'a, T> {
    pub fn new(items: &'a [T]) -> Result<Self, SiteError> {
        if items.is_empty() {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self { items, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> &'a T {
        &self.items[self.index]
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.items.len();
        tracing::trace!(index = self.index, "carousel advanced");
        self.index
    }

    pub fn previous(&mut self) -> usize {
        let len = self.items.len();
        self.index = (self.index + len - 1) % len;
        tracing::trace!(index = self.index, "carousel rewound");
        self.index
    }

    /// Up to `count` consecutive items starting at the active index, wrapping
    /// around the end. Never longer than the list, so no item repeats.
    pub fn window(&self, count: usize) -> Vec<CarouselSlot<'a, T>> {
        let len = self.items.len();
        (0..count.min(len))
            .map(|offset| {
                let position = (self.index + offset) % len;
                CarouselSlot {
                    item: &self.items[position],
                    position,
                    emphasized: offset == 0,
                }
            })
            .collect()
    }
}

/// Repeating timer armed while the owning section is mounted.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    next_due: Option<Instant>,
    lifecycle: Lifecycle,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
            lifecycle: Lifecycle::Inactive,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_armed(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn mount(&mut self, now: Instant) {
        if self.lifecycle.activate() {
            self.next_due = now.checked_add(self.interval);
            if self.next_due.is_none() {
                tracing::warn!("carousel interval out of range; auto-advance disabled");
            }
            tracing::debug!(interval_ms = self.interval.as_millis() as u64, "carousel timer armed");
        }
    }

    pub fn unmount(&mut self) {
        if self.lifecycle.deactivate() {
            self.next_due = None;
            tracing::debug!("carousel timer cancelled");
        }
    }

    /// Returns `true` when a tick is due. A late poll fires once; if more
    /// than one full interval was missed the schedule restarts from `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.next_due = match due.checked_add(self.interval) {
            Some(following) if following > now => Some(following),
            _ => now.checked_add(self.interval),
        };
        true
    }

    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(DEFAULT_AUTO_ADVANCE)
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
