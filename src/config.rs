//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use shopping_list_core::{Category, Item};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "Shopping List";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Id of the DOM element the app mounts into.
pub const MOUNT_ID: &str = "app";

// =============================================================================
// UI Text
// =============================================================================

/// Labels and placeholders used by the list components.
pub mod labels {
    /// Placeholder of the search box.
    pub const SEARCH_PLACEHOLDER: &str = "Search...";
    /// Label of the "All" option in the category filter.
    pub const FILTER_ALL: &str = "Filter by category";
    /// Form name field label.
    pub const NAME: &str = "Name:";
    /// Form category field label.
    pub const CATEGORY: &str = "Category:";
    /// Form submit button.
    pub const SUBMIT: &str = "Add to List";
    /// Shown in place of the list when nothing matches.
    pub const EMPTY_RESULT: &str = "No items match your filter.";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Seed Data
// =============================================================================

/// Items the list starts with.
const SEED_ITEMS: &[(&str, Category)] = &[
    ("Yogurt", Category::Dairy),
    ("Pomegranate", Category::Produce),
    ("Lettuce", Category::Produce),
    ("String Cheese", Category::Dairy),
    ("Swiss Cheese", Category::Dairy),
    ("Cookies", Category::Dessert),
];

/// Build the initial item list. Each call draws fresh ids.
pub fn seed_items() -> Vec<Item> {
    SEED_ITEMS
        .iter()
        .map(|&(name, category)| Item::new(name, category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_items_cover_every_category() {
        let items = seed_items();
        assert_eq!(items.len(), SEED_ITEMS.len());
        for category in Category::ALL {
            assert!(items.iter().any(|i| i.category() == category));
        }
    }

    #[test]
    fn test_seed_items_fresh_ids() {
        let a = seed_items();
        let b = seed_items();
        assert_ne!(a[0].id(), b[0].id());
    }
}
