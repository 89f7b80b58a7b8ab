//! Data model for the shopping list.
//!
//! - [`Item`], [`ItemId`] - List entries and their identifiers
//! - [`Category`], [`CategoryFilter`] - Item categories and the filter selector

mod category;
mod item;

pub use category::{Category, CategoryFilter};
pub use item::{Item, ItemId};
