//! Shopping session: owner of the item list, filter and form.
//!
//! User interactions arrive as [`ShoppingEvent`]s and are applied as explicit
//! state transitions. Submitting the form returns the new item to the caller
//! instead of notifying it through a stored callback.

use std::fmt;

use crate::filter::{self, FilterState};
use crate::form::ItemForm;
use crate::models::{Category, CategoryFilter, Item};
use crate::repository::ItemRepository;

/// A single user interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShoppingEvent {
    /// Search box text changed.
    SearchChanged(String),
    /// Category filter selection changed.
    CategoryFilterChanged(CategoryFilter),
    /// Form name field changed.
    PendingNameChanged(String),
    /// Form category field changed.
    PendingCategoryChanged(Category),
    /// Form submitted.
    Submitted,
}

/// Visible vs. total item counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListSummary {
    pub visible: usize,
    pub total: usize,
}

impl ListSummary {
    pub fn is_filtered(&self) -> bool {
        self.visible != self.total
    }
}

impl fmt::Display for ListSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "item" } else { "items" };
        if self.is_filtered() {
            write!(f, "Showing {} of {} {}", self.visible, self.total, noun)
        } else {
            write!(f, "{} {}", self.total, noun)
        }
    }
}

/// All state behind one shopping list view.
#[derive(Clone, Debug, Default)]
pub struct ShoppingSession {
    items: ItemRepository,
    filter: FilterState,
    form: ItemForm,
}

impl ShoppingSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session with an initial list of items.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: ItemRepository::from_items(items),
            ..Self::default()
        }
    }

    pub fn items(&self) -> &ItemRepository {
        &self.items
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    /// Applies one event. Returns the created item for
    /// [`ShoppingEvent::Submitted`], `None` otherwise.
    pub fn apply(&mut self, event: ShoppingEvent) -> Option<Item> {
        match event {
            ShoppingEvent::SearchChanged(text) => {
                self.filter.set_search_text(text);
                None
            }
            ShoppingEvent::CategoryFilterChanged(category) => {
                self.filter.set_category(category);
                None
            }
            ShoppingEvent::PendingNameChanged(name) => {
                self.form.set_pending_name(name);
                None
            }
            ShoppingEvent::PendingCategoryChanged(category) => {
                self.form.set_pending_category(category);
                None
            }
            ShoppingEvent::Submitted => {
                let items = &mut self.items;
                Some(self.form.submit(|item| items.append(item.clone())))
            }
        }
    }

    /// Items passing the current filter, in insertion order.
    pub fn visible_items(&self) -> Vec<Item> {
        self.filter.apply(self.items.items())
    }

    pub fn summary(&self) -> ListSummary {
        let visible = filter::visible_items_iter(
            self.items.items(),
            self.filter.search_text(),
            self.filter.selected_category(),
        )
        .count();
        ListSummary {
            visible,
            total: self.items.len(),
        }
    }
}
