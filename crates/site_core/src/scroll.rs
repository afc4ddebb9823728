use crate::lifecycle::Lifecycle;

pub const SCROLLED_THRESHOLD_PX: f32 = 20.0;

/// Tracks the page scroll offset for the navbar's "scrolled" styling.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f32,
    offset: f32,
    scrolled: bool,
    lifecycle: Lifecycle,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self {
            threshold: SCROLLED_THRESHOLD_PX,
            offset: 0.0,
            scrolled: false,
            lifecycle: Lifecycle::Inactive,
        }
    }

    pub fn subscribe(&mut self) {
        if self.lifecycle.activate() {
            tracing::debug!("scroll tracker subscribed");
        }
    }

    pub fn unsubscribe(&mut self) {
        if self.lifecycle.deactivate() {
            tracing::debug!("scroll tracker unsubscribed");
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.lifecycle.is_active()
    }

    /// Returns `true` when `is_scrolled` flipped.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        if !self.lifecycle.is_active() {
            return false;
        }
        self.offset = offset;
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}
