//! The shopping list entry.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Opaque, unique identifier of an [`Item`].
///
/// Backed by a random v4 UUID; a fresh id is drawn for every item created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Generate a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A named, categorized entry in the shopping list.
///
/// Items are immutable once created: fields are read through accessors and
/// the id is assigned at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    category: Category,
}

impl Item {
    /// Create an item with a freshly generated id.
    ///
    /// The name is kept exactly as given, including surrounding whitespace
    /// and the empty string.
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            category,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_keeps_fields() {
        let item = Item::new("Apple", Category::Produce);
        assert_eq!(item.name(), "Apple");
        assert_eq!(item.category(), Category::Produce);
    }

    #[test]
    fn test_name_not_trimmed() {
        let item = Item::new("  Milk ", Category::Dairy);
        assert_eq!(item.name(), "  Milk ");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Item::new("Apple", Category::Produce);
        let b = Item::new("Apple", Category::Produce);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_clone_keeps_id() {
        let item = Item::new("Cookies", Category::Dessert);
        assert_eq!(item.clone().id(), item.id());
    }

    #[test]
    fn test_json_shape() {
        let item = Item::new("Yogurt", Category::Dairy);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["name"], "Yogurt");
        assert_eq!(value["category"], "Dairy");
        assert_eq!(value["id"], item.id().to_string());
    }
}
