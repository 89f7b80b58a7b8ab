//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`shopping_list`] - The list page: add form, filter bar and item rows

pub mod icons;
pub mod shopping_list;

pub use shopping_list::ShoppingList;
