//! Shopping list page.
//!
//! Components:
//! - [`ShoppingList`] - Page container wiring form, filter and list together
//! - [`ItemForm`] - New item form
//! - [`FilterBar`] - Search box and category selector
//! - [`ItemRow`] - A single list entry

mod filter_bar;
mod item_form;
mod item_row;
#[allow(clippy::module_inception)]
mod shopping_list;

pub use filter_bar::FilterBar;
pub use item_form::ItemForm;
pub use item_row::ItemRow;
pub use shopping_list::ShoppingList;
