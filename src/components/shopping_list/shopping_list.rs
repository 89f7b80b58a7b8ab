//! Shopping list page container.
//!
//! ## Layout
//!
//! Header, add form, filter bar, then the filtered list with a count line.
//! The list is keyed by item id, so adding an item or narrowing the filter
//! only touches the affected rows.

use leptos::prelude::*;
use leptos_icons::Icon;
use shopping_list_core::Item;

use super::{FilterBar, ItemForm, ItemRow};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_VERSION, labels};

stylance::import_crate_style!(css, "src/components/shopping_list/shopping_list.module.css");

/// Console line for a newly added item, with the item as JSON.
fn added_log_line(item: &Item) -> String {
    match serde_json::to_string(item) {
        Ok(json) => format!("Item added: {}", json),
        Err(_) => format!("Item added: {}", item.name()),
    }
}

#[component]
pub fn ShoppingList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let visible_items = ctx.visible_items();
    let summary = ctx.summary();
    let has_results = Signal::derive(move || visible_items.with(|items| !items.is_empty()));

    // Announced to screen readers after each add
    let last_added = RwSignal::new(None::<String>);

    let on_item_added = Callback::new(move |item: Item| {
        web_sys::console::log_1(&added_log_line(&item).into());
        last_added.set(Some(format!("Added {}", item.name())));
    });

    view! {
        <main class=css::page>
            <header class=css::header>
                <h1 class=css::title>{APP_NAME}</h1>
                <span class=css::version>{format!("v{}", APP_VERSION)}</span>
            </header>

            <ItemForm on_item_added=on_item_added />
            <p class=css::srOnly role="status" aria-live="polite">
                {move || last_added.get().unwrap_or_default()}
            </p>

            <section class=css::listSection>
                <FilterBar />

                <div class=css::summary>
                    <Icon icon=ic::LIST />
                    <span>{move || summary.get().to_string()}</span>
                </div>

                <Show
                    when=move || has_results.get()
                    fallback=|| view! { <p class=css::empty>{labels::EMPTY_RESULT}</p> }
                >
                    <ul class=css::items>
                        <For
                            each=move || visible_items.get()
                            key=|item| item.id()
                            children=move |item| view! { <ItemRow item=item /> }
                        />
                    </ul>
                </Show>
            </section>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopping_list_core::Category;

    #[test]
    fn test_added_log_line_contains_json() {
        let item = Item::new("Bread", Category::Produce);
        let line = added_log_line(&item);
        assert!(line.starts_with("Item added: {"));
        assert!(line.contains("\"name\":\"Bread\""));
        assert!(line.contains("\"category\":\"Produce\""));
        assert!(line.contains(&item.id().to_string()));
    }
}
