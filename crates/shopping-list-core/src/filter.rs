//! Filter engine for the visible item list.
//!
//! Combines two predicates over the item sequence:
//! - category: `All` admits everything, otherwise the item's category must match
//! - search text: case-insensitive substring of the item name, empty admits everything
//!
//! Filtering is stable and never mutates its input.

use crate::models::{CategoryFilter, Item};

/// Current filter controls: search text and category selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    search_text: String,
    selected_category: CategoryFilter,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.selected_category = category;
    }

    /// Returns a copy with the search text replaced.
    pub fn with_search_text(mut self, text: impl Into<String>) -> Self {
        self.set_search_text(text);
        self
    }

    /// Returns a copy with the category selector replaced.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.set_category(category);
        self
    }

    /// Whether either control restricts the list.
    pub fn is_active(&self) -> bool {
        !self.search_text.is_empty() || self.selected_category != CategoryFilter::All
    }

    /// Whether a single item passes both predicates.
    pub fn matches(&self, item: &Item) -> bool {
        self.selected_category.admits(item.category())
            && name_contains(item.name(), &self.search_text.to_lowercase())
    }

    /// Apply this filter to `items`.
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        visible_items(items, &self.search_text, self.selected_category)
    }
}

/// Compute the visible subset of `items`, preserving order.
pub fn visible_items(
    items: &[Item],
    search_text: &str,
    selected_category: CategoryFilter,
) -> Vec<Item> {
    let visible: Vec<Item> = visible_items_iter(items, search_text, selected_category)
        .cloned()
        .collect();
    tracing::trace!(
        total = items.len(),
        visible = visible.len(),
        category = %selected_category,
        "recomputed visible items"
    );
    visible
}

/// Borrowing form of [`visible_items`].
pub fn visible_items_iter<'a>(
    items: &'a [Item],
    search_text: &str,
    selected_category: CategoryFilter,
) -> impl Iterator<Item = &'a Item> + use<'a> {
    let needle = search_text.to_lowercase();
    items.iter().filter(move |item| {
        selected_category.admits(item.category()) && name_contains(item.name(), &needle)
    })
}

/// Case-insensitive substring check; `needle` must already be lower-cased.
fn name_contains(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}
