//! Domain constants shared by the core and the view layer.

use crate::models::Category;

/// Selector value meaning "no category restriction".
pub const ALL_SENTINEL: &str = "All";

/// Category a fresh or reset form starts with.
pub const DEFAULT_CATEGORY: Category = Category::Produce;
