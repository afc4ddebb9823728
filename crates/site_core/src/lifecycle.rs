//! Scoped acquisition of environment signals (scroll, timers, visibility).
//!
//! Each interactive component owns a [`Lifecycle`]. Activation happens when
//! the component mounts and deactivation when it is torn down; anything
//! delivered while inactive is dropped by the owner.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Inactive,
    Active,
}

impl Lifecycle {
    /// Returns `true` if this call performed the transition.
    pub fn activate(&mut self) -> bool {
        let changed = *self == Lifecycle::Inactive;
        *self = Lifecycle::Active;
        changed
    }

    pub fn deactivate(&mut self) -> bool {
        let changed = *self == Lifecycle::Active;
        *self = Lifecycle::Inactive;
        changed
    }

    pub fn is_active(self) -> bool {
        self == Lifecycle::Active
    }
}
