use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(SubmissionId);

/// Page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    Services,
    Portfolio,
    Process,
    Team,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::Services,
        SectionId::Portfolio,
        SectionId::Process,
        SectionId::Team,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Services => "services",
            SectionId::Portfolio => "portfolio",
            SectionId::Process => "process",
            SectionId::Team => "team",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }
}

/// Opaque image URL; resolution and caching belong to the asset loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    pub fn url(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Code,
    Sparkles,
    Zap,
    Layers,
    ShoppingCart,
    Smartphone,
    BarChart,
    Lightbulb,
    Palette,
    Lock,
    Search,
    Pencil,
    Mail,
    Phone,
    MapPin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: ImageRef,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub slug: &'static str,
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStep {
    pub number: &'static str,
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub slug: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub image: ImageRef,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub company: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroHighlight {
    pub glyph: Glyph,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub glyph: Glyph,
    pub title: &'static str,
    pub details: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub day: &'static str,
    pub hours: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkGroup {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

/// Badge plus a heading whose middle phrase is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading {
    pub badge: &'static str,
    pub lead_in: &'static str,
    pub highlight: &'static str,
    pub trailing: &'static str,
    pub blurb: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_distinct_anchor() {
        let anchors: std::collections::HashSet<_> =
            SectionId::ALL.iter().map(|section| section.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
        assert_eq!(SectionId::Portfolio.anchor(), "portfolio");
    }

    #[test]
    fn sections_sort_in_document_order() {
        let mut shuffled = vec![SectionId::Contact, SectionId::Home, SectionId::Team];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![SectionId::Home, SectionId::Team, SectionId::Contact]
        );
    }
}
