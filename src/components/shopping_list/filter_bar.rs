//! Search box and category selector.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use shopping_list_core::{CategoryFilter, ShoppingEvent};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;

stylance::import_crate_style!(css, "src/components/shopping_list/filter_bar.module.css");

/// Option text for a filter value; the sentinel gets a prompt label.
fn option_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => labels::FILTER_ALL,
        CategoryFilter::Only(category) => category.as_str(),
    }
}

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let filter = ctx.filter();

    let search_text = Signal::derive(move || filter.with(|f| f.search_text().to_string()));
    let selected = Signal::derive(move || filter.with(|f| f.selected_category().to_string()));

    let handle_search_input = move |ev: ev::Event| {
        ctx.dispatch(ShoppingEvent::SearchChanged(event_target_value(&ev)));
    };

    let handle_category_change = move |ev: ev::Event| {
        match event_target_value(&ev).parse::<CategoryFilter>() {
            Ok(category) => {
                ctx.dispatch(ShoppingEvent::CategoryFilterChanged(category));
            }
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
    };

    view! {
        <div class=css::bar>
            <div class=css::search>
                <span class=css::searchIcon aria-hidden="true"><Icon icon=ic::SEARCH /></span>
                <input
                    type="text"
                    name="search"
                    class=css::searchInput
                    placeholder=labels::SEARCH_PLACEHOLDER
                    autocomplete="off"
                    prop:value=search_text
                    on:input=handle_search_input
                />
            </div>
            <select
                name="filter"
                class=css::select
                prop:value=selected
                on:change=handle_category_change
            >
                {CategoryFilter::options()
                    .map(|f| view! { <option value=f.as_str()>{option_label(f)}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopping_list_core::Category;

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(CategoryFilter::All), "Filter by category");
        assert_eq!(option_label(CategoryFilter::Only(Category::Dairy)), "Dairy");
    }
}
