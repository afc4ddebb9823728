use shared::domain::SectionId;

/// Viewport width below which the navbar collapses into a toggled overlay.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

pub fn is_compact(viewport_width: f32) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponsiveMenu {
    open: bool,
}

impl ResponsiveMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Any navigation closes the overlay; the target is handed back to the
    /// caller to scroll to.
    pub fn navigate(&mut self, target: SectionId) -> SectionId {
        self.close();
        target
    }

    pub fn overlay_visible(&self, viewport_width: f32) -> bool {
        self.open && is_compact(viewport_width)
    }
}
