//! Pending new-item form.
//!
//! Holds the fields the user is typing into and turns them into an [`Item`]
//! on submit. No validation is applied: an empty name yields a valid item.

use crate::config::DEFAULT_CATEGORY;
use crate::models::{Category, Item};

/// Form state for adding a new item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemForm {
    pending_name: String,
    pending_category: Category,
}

impl ItemForm {
    /// Creates an empty form with the default category selected.
    pub fn new() -> Self {
        Self {
            pending_name: String::new(),
            pending_category: DEFAULT_CATEGORY,
        }
    }

    pub fn pending_name(&self) -> &str {
        &self.pending_name
    }

    pub fn pending_category(&self) -> Category {
        self.pending_category
    }

    pub fn set_pending_name(&mut self, value: impl Into<String>) {
        self.pending_name = value.into();
    }

    pub fn set_pending_category(&mut self, value: Category) {
        self.pending_category = value;
    }

    /// True when both fields hold their reset values.
    pub fn is_pristine(&self) -> bool {
        self.pending_name.is_empty() && self.pending_category == DEFAULT_CATEGORY
    }

    /// Builds an item from the pending fields and resets the form.
    pub fn submit_item(&mut self) -> Item {
        let name = std::mem::take(&mut self.pending_name);
        let item = Item::new(name, self.pending_category);
        self.pending_category = DEFAULT_CATEGORY;
        tracing::debug!(id = %item.id(), name = item.name(), category = %item.category(), "form submitted");
        item
    }

    /// Like [`submit_item`](Self::submit_item), handing the item to
    /// `on_submit` before returning it.
    ///
    /// The form is already reset when `on_submit` runs.
    pub fn submit(&mut self, on_submit: impl FnOnce(&Item)) -> Item {
        let item = self.submit_item();
        on_submit(&item);
        item
    }

    /// Discards pending input.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = ItemForm::new();
        assert_eq!(form.pending_name(), "");
        assert_eq!(form.pending_category(), Category::Produce);
        assert!(form.is_pristine());
    }

    #[test]
    fn test_submit_emits_and_resets() {
        let mut form = ItemForm::new();
        form.set_pending_name("Bread");
        form.set_pending_category(Category::Produce);

        let mut emitted = Vec::new();
        let item = form.submit(|item| emitted.push(item.clone()));

        assert_eq!(item.name(), "Bread");
        assert_eq!(item.category(), Category::Produce);
        assert_eq!(emitted, vec![item]);
        assert_eq!(form.pending_name(), "");
        assert_eq!(form.pending_category(), Category::Produce);
    }

    #[test]
    fn test_submit_resets_category() {
        let mut form = ItemForm::new();
        form.set_pending_name("Cookies");
        form.set_pending_category(Category::Dessert);
        assert!(!form.is_pristine());

        let item = form.submit_item();
        assert_eq!(item.category(), Category::Dessert);
        assert!(form.is_pristine());
    }

    #[test]
    fn test_empty_name_accepted() {
        let mut form = ItemForm::new();
        let item = form.submit_item();
        assert_eq!(item.name(), "");
        assert_eq!(item.category(), Category::Produce);
    }

    #[test]
    fn test_each_submit_gets_fresh_id() {
        let mut form = ItemForm::new();
        form.set_pending_name("Milk");
        let a = form.submit_item();
        form.set_pending_name("Milk");
        let b = form.submit_item();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_callback_runs_once() {
        let mut form = ItemForm::new();
        let mut calls = 0;
        form.submit(|_| calls += 1);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_reset() {
        let mut form = ItemForm::new();
        form.set_pending_name("Yogurt");
        form.set_pending_category(Category::Dairy);
        form.reset();
        assert!(form.is_pristine());
    }
}
