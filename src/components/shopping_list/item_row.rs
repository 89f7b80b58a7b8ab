//! A single shopping list entry.

use leptos::prelude::*;
use shopping_list_core::{Category, Item};

stylance::import_crate_style!(css, "src/components/shopping_list/item_row.module.css");

/// Badge class for a category.
fn category_class(category: Category) -> &'static str {
    match category {
        Category::Produce => css::produce,
        Category::Dairy => css::dairy,
        Category::Dessert => css::dessert,
    }
}

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let category = item.category();
    let badge_class = format!("{} {}", css::category, category_class(category));

    view! {
        <li class=css::row>
            <span class=css::name>{item.name().to_string()}</span>
            <span class=badge_class>{category.as_str()}</span>
        </li>
    }
}
