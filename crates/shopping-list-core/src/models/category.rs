//! Item categories and the category selector used for filtering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{ALL_SENTINEL, DEFAULT_CATEGORY};
use crate::error::ParseCategoryError;

/// Grocery category an item belongs to.
///
/// Serialises as its display name (`"Produce"`, `"Dairy"`, `"Dessert"`),
/// which is also the `<option>` value used by the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Produce,
    Dairy,
    Dessert,
}

impl Category {
    /// All categories, in the order the form offers them.
    pub const ALL: [Category; 3] = [Category::Produce, Category::Dairy, Category::Dessert];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Produce => "Produce",
            Category::Dairy => "Dairy",
            Category::Dessert => "Dessert",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        DEFAULT_CATEGORY
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseCategoryError::new(s))
    }
}

/// Category selector for the list filter.
///
/// `All` is a filter-only sentinel; it is never assigned to an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No category restriction (default).
    #[default]
    All,
    /// Only items of the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Filter options in display order: the sentinel first, then each category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Whether an item of `category` passes this selector.
    #[inline]
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_SENTINEL,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_SENTINEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_produce() {
        assert_eq!(Category::default(), Category::Produce);
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Produce".parse::<Category>(), Ok(Category::Produce));
        assert_eq!("Dairy".parse::<Category>(), Ok(Category::Dairy));
        assert_eq!("Dessert".parse::<Category>(), Ok(Category::Dessert));
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        let err = "dairy".parse::<Category>().unwrap_err();
        assert_eq!(err.value, "dairy");
    }

    #[test]
    fn test_category_rejects_sentinel() {
        assert!("All".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_parse_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Dessert".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Dessert))
        );
        assert!("Bakery".parse::<CategoryFilter>().is_err());
        assert!("".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_filter_display_matches_option_values() {
        let values: Vec<String> = CategoryFilter::options().map(|f| f.to_string()).collect();
        assert_eq!(values, vec!["All", "Produce", "Dairy", "Dessert"]);
    }

    #[test]
    fn test_filter_admits() {
        assert!(CategoryFilter::All.admits(Category::Dairy));
        assert!(CategoryFilter::Only(Category::Dairy).admits(Category::Dairy));
        assert!(!CategoryFilter::Only(Category::Dairy).admits(Category::Produce));
    }

    #[test]
    fn test_category_serializes_as_name() {
        let json = serde_json::to_string(&Category::Dessert).unwrap();
        assert_eq!(json, "\"Dessert\"");
        let parsed: Category = serde_json::from_str("\"Dairy\"").unwrap();
        assert_eq!(parsed, Category::Dairy);
    }
}
