//! Append-only, insertion-ordered item store.

use crate::models::{Item, ItemId};

/// In-memory list of items in the order they were added.
///
/// The only mutation is [`append`](Self::append). Ids are generated by
/// [`Item::new`], so appended items are unique by construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemRepository {
    items: Vec<Item>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a repository from an initial list, keeping its order.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        items.into_iter().collect()
    }

    /// Adds an item to the end of the list.
    pub fn append(&mut self, item: Item) {
        tracing::debug!(id = %item.id(), len = self.items.len() + 1, "appended item");
        self.items.push(item);
    }

    /// Current snapshot, oldest first.
    #[inline]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<Item> for ItemRepository {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ItemRepository {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_new_is_empty() {
        let repo = ItemRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.len(), 0);
        assert!(repo.items().is_empty());
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut repo = ItemRepository::new();
        repo.append(Item::new("Yogurt", Category::Dairy));
        repo.append(Item::new("Lettuce", Category::Produce));
        repo.append(Item::new("Cookies", Category::Dessert));

        let names: Vec<_> = repo.iter().map(|i| i.name()).collect();
        assert_eq!(names, vec!["Yogurt", "Lettuce", "Cookies"]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn test_get_by_id() {
        let apple = Item::new("Apple", Category::Produce);
        let id = apple.id();
        let repo = ItemRepository::from_items(vec![Item::new("Milk", Category::Dairy), apple]);

        assert_eq!(repo.get(id).map(|i| i.name()), Some("Apple"));
        assert_eq!(repo.get(ItemId::new()), None);
    }

    #[test]
    fn test_from_items_preserves_order() {
        let seed = vec![
            Item::new("A", Category::Produce),
            Item::new("B", Category::Dairy),
        ];
        let repo = ItemRepository::from_items(seed.clone());
        assert_eq!(repo.items(), seed.as_slice());
    }

    #[test]
    fn test_borrowing_into_iter() {
        let repo: ItemRepository = vec![Item::new("Apple", Category::Produce)]
            .into_iter()
            .collect();
        let mut count = 0;
        for item in &repo {
            assert_eq!(item.name(), "Apple");
            count += 1;
        }
        assert_eq!(count, 1);
    }
}
