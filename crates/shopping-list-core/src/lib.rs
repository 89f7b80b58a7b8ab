//! Core state and filtering for the shopping list app.
//!
//! This crate provides:
//! - [`Item`], [`Category`], [`CategoryFilter`] - the data model
//! - [`visible_items`] and [`FilterState`] - the search/category filter
//! - [`ItemForm`] - pending new-item fields and submission
//! - [`ItemRepository`] - append-only item list
//! - [`ShoppingSession`] - event-driven owner of all of the above
//!
//! Everything here is synchronous and platform independent; the web crate
//! wraps it in reactive signals.

pub mod config;
pub mod error;
mod filter;
mod form;
mod models;
mod repository;
mod session;

pub use error::ParseCategoryError;
pub use filter::{FilterState, visible_items, visible_items_iter};
pub use form::ItemForm;
pub use models::{Category, CategoryFilter, Item, ItemId};
pub use repository::ItemRepository;
pub use session::{ListSummary, ShoppingEvent, ShoppingSession};
