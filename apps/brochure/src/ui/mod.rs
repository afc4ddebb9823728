//! UI layer for the brochure: app shell, page sections, widgets, and theme.

pub mod app;
pub mod sections;
pub mod theme;
pub mod widgets;

pub use app::{BrochureApp, PageOptions};
