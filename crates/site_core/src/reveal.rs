//! One-shot reveal animation driven by element visibility.
//!
//! Elements are keyed by a stable identity. The renderer re-syncs the key set
//! whenever the rendered set changes (e.g. after a portfolio filter change)
//! and reports each observed element's visible ratio once per frame.

use std::{
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

use shared::domain::SectionId;

use crate::lifecycle::Lifecycle;

pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);
pub const CARD_STAGGER: Duration = Duration::from_millis(50);
pub const STEP_STAGGER: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealKey {
    pub section: SectionId,
    pub slug: &'static str,
}

impl RevealKey {
    pub fn new(section: SectionId, slug: &'static str) -> Self {
        Self { section, slug }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RevealState {
    Observed,
    Revealed { at: Instant },
}

/// Vertical extent in a shared coordinate space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub bottom: f32,
}

impl Span {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    pub fn height(self) -> f32 {
        (self.bottom - self.top).max(0.0)
    }
}

/// Fraction of `item` inside `viewport`, in `0.0..=1.0`.
pub fn visible_ratio(item: Span, viewport: Span) -> f32 {
    let height = item.height();
    if height <= f32::EPSILON {
        return 0.0;
    }
    let overlap = (item.bottom.min(viewport.bottom) - item.top.max(viewport.top)).max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
pub struct RevealTracker<K = RevealKey> {
    entries: HashMap<K, RevealState>,
    threshold: f32,
    enabled: bool,
    lifecycle: Lifecycle,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            threshold: REVEAL_THRESHOLD,
            enabled: true,
            lifecycle: Lifecycle::Inactive,
        }
    }

    /// Tracker for environments without visibility support: everything
    /// renders in its final state.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn mount(&mut self) {
        self.lifecycle.activate();
    }

    /// Releases every observer.
    pub fn unmount(&mut self) {
        if self.lifecycle.deactivate() {
            self.entries.clear();
        }
    }

    /// Observes new keys and releases keys that are no longer rendered.
    /// Keys that stay rendered keep their state.
    pub fn sync<I>(&mut self, rendered: I)
    where
        I: IntoIterator<Item = K>,
    {
        if !self.enabled || !self.lifecycle.is_active() {
            return;
        }
        let rendered: Vec<K> = rendered.into_iter().collect();
        self.entries.retain(|key, _| rendered.contains(key));
        for key in rendered {
            self.entries.entry(key).or_insert(RevealState::Observed);
        }
    }

    /// Like [`sync`](Self::sync) but scoped to keys accepted by `scope`;
    /// keys outside the scope are left untouched.
    pub fn sync_scoped<I, F>(&mut self, rendered: I, scope: F)
    where
        I: IntoIterator<Item = K>,
        F: Fn(&K) -> bool,
    {
        if !self.enabled || !self.lifecycle.is_active() {
            return;
        }
        let rendered: Vec<K> = rendered.into_iter().collect();
        self.entries
            .retain(|key, _| !scope(key) || rendered.contains(key));
        for key in rendered {
            self.entries.entry(key).or_insert(RevealState::Observed);
        }
    }

    /// Returns `true` only on the unrevealed → revealed transition.
    pub fn report(&mut self, key: &K, ratio: f32, now: Instant) -> bool {
        if !self.enabled || !self.lifecycle.is_active() {
            return false;
        }
        let Some(state) = self.entries.get_mut(key) else {
            return false;
        };
        if *state == RevealState::Observed && ratio >= self.threshold {
            *state = RevealState::Revealed { at: now };
            return true;
        }
        false
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        if !self.enabled {
            return true;
        }
        matches!(self.entries.get(key), Some(RevealState::Revealed { .. }))
    }

    pub fn is_observed(&self, key: &K) -> bool {
        matches!(self.entries.get(key), Some(RevealState::Observed))
    }

    /// Eased animation progress in `0.0..=1.0`. `delay` staggers siblings.
    pub fn progress(&self, key: &K, now: Instant, delay: Duration) -> f32 {
        if !self.enabled {
            return 1.0;
        }
        match self.entries.get(key) {
            Some(RevealState::Revealed { at }) => {
                let start = *at + delay;
                let elapsed = now.saturating_duration_since(start);
                let t = (elapsed.as_secs_f32() / REVEAL_DURATION.as_secs_f32()).clamp(0.0, 1.0);
                ease_out_cubic(t)
            }
            _ => 0.0,
        }
    }

    /// Whether any revealed element is still mid-animation.
    pub fn is_animating(&self, now: Instant, max_delay: Duration) -> bool {
        self.enabled
            && self.entries.values().any(|state| match state {
                RevealState::Revealed { at } => {
                    now.saturating_duration_since(*at) < REVEAL_DURATION + max_delay
                }
                RevealState::Observed => false,
            })
    }

    pub fn tracked(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Eq + Hash + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
#[path = "tests/reveal_tests.rs"]
mod tests;
