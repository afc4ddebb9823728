//! Interactive state for the PixelPerfect brochure page: portfolio filter,
//! testimonial carousel, reveal-on-scroll, navbar scroll/menu state and the
//! contact form, plus the static content they render.
//!
//! Nothing here depends on a GUI toolkit; the renderer feeds in scroll
//! offsets, visibility ratios and clock readings and reads state back.

pub mod carousel;
pub mod contact;
pub mod content;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod hero;
pub mod lifecycle;
pub mod menu;
pub mod navigation;
pub mod notifications;
pub mod reveal;
pub mod scroll;

pub use carousel::{AutoAdvance, Carousel, CarouselSlot};
pub use contact::{ContactDraft, ContactField, ContactForm, FormPhase};
pub use error::{ContactError, SiteError};
pub use filter::{CategoryFilter, CategorySelection, ALL_CATEGORIES};
pub use gateway::{ContactGateway, SimulatedContactGateway, WebhookContactGateway};
pub use lifecycle::Lifecycle;
pub use menu::ResponsiveMenu;
pub use navigation::{NavItem, SectionAnchors, NAV_ITEMS};
pub use notifications::{Notification, NotificationKind, ToastQueue};
pub use reveal::{RevealKey, RevealTracker, Span};
pub use scroll::ScrollTracker;
