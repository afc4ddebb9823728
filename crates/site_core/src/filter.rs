//! Portfolio category filter.

use shared::domain::Project;

pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySelection {
    All,
    Only(String),
}

impl CategorySelection {
    pub fn parse(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategorySelection::All
        } else {
            CategorySelection::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategorySelection::All => ALL_CATEGORIES,
            CategorySelection::Only(label) => label,
        }
    }

    fn matches(&self, project: &Project) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(label) => project.category == label.as_str(),
        }
    }
}

/// Derives the visible project list from a static catalog and the active
/// category. The catalog itself is never mutated.
#[derive(Debug, Clone)]
pub struct CategoryFilter<'a> {
    items: &'a [Project],
    categories: &'a [&'a str],
    active: CategorySelection,
}

impl<'a> CategoryFilter<'a> {
    /// `categories` is the button list in display order, wildcard included.
    pub fn new(items: &'a [Project], categories: &'a [&'a str]) -> Self {
        Self {
            items,
            categories,
            active: CategorySelection::All,
        }
    }

    /// Unknown labels are accepted and simply match nothing.
    pub fn select(&mut self, category: &str) {
        let next = CategorySelection::parse(category);
        if next != self.active {
            tracing::debug!(category, "portfolio category selected");
            self.active = next;
        }
    }

    pub fn active(&self) -> &CategorySelection {
        &self.active
    }

    pub fn is_active(&self, label: &str) -> bool {
        self.active.label() == label
    }

    pub fn visible_items(&self) -> Vec<&'a Project> {
        self.items
            .iter()
            .filter(|project| self.active.matches(project))
            .collect()
    }

    pub fn visible_slugs(&self) -> Vec<&'static str> {
        self.visible_items()
            .into_iter()
            .map(|project| project.slug)
            .collect()
    }

    pub fn categories(&self) -> &'a [&'a str] {
        self.categories
    }
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
