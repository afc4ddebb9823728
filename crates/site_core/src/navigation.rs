//! Navbar entries and section scroll targets.

use std::collections::BTreeMap;

use shared::domain::SectionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: SectionId,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Home",
        target: SectionId::Home,
    },
    NavItem {
        label: "Services",
        target: SectionId::Services,
    },
    NavItem {
        label: "Work",
        target: SectionId::Portfolio,
    },
    NavItem {
        label: "Process",
        target: SectionId::Process,
    },
    NavItem {
        label: "Team",
        target: SectionId::Team,
    },
    NavItem {
        label: "Contact",
        target: SectionId::Contact,
    },
];

pub const GET_STARTED_TARGET: SectionId = SectionId::Contact;
pub const START_PROJECT_TARGET: SectionId = SectionId::Contact;
pub const VIEW_WORK_TARGET: SectionId = SectionId::Portfolio;

/// Section top offsets in scroll-content coordinates, refreshed every layout
/// pass.
#[derive(Debug, Clone, Default)]
pub struct SectionAnchors {
    tops: BTreeMap<SectionId, f32>,
    header_height: f32,
}

impl SectionAnchors {
    pub fn new(header_height: f32) -> Self {
        Self {
            tops: BTreeMap::new(),
            header_height,
        }
    }

    pub fn set_header_height(&mut self, header_height: f32) {
        self.header_height = header_height.max(0.0);
    }

    pub fn record(&mut self, section: SectionId, top: f32) {
        self.tops.insert(section, top);
    }

    /// Offset that places the section just below the fixed header; `None`
    /// until the section has been laid out once.
    pub fn scroll_target(&self, section: SectionId) -> Option<f32> {
        self.tops
            .get(&section)
            .map(|top| (top - self.header_height).max(0.0))
    }

    /// Section whose top was last passed at `offset`.
    pub fn current(&self, offset: f32) -> Option<SectionId> {
        self.tops
            .iter()
            .filter(|(_, top)| **top - self.header_height <= offset + 1.0)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(section, _)| *section)
    }
}
