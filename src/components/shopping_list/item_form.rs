//! New item form.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use shopping_list_core::{Category, Item, ShoppingEvent};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::labels;

stylance::import_crate_style!(css, "src/components/shopping_list/item_form.module.css");

/// Form for adding an item.
///
/// Field edits and the submission go through the session; the created item
/// is then handed to `on_item_added`.
#[component]
pub fn ItemForm(on_item_added: Callback<Item>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let form = ctx.form();

    let pending_name = Signal::derive(move || form.with(|f| f.pending_name().to_string()));
    let pending_category = Signal::derive(move || form.with(|f| f.pending_category().to_string()));

    let handle_name_input = move |ev: ev::Event| {
        ctx.dispatch(ShoppingEvent::PendingNameChanged(event_target_value(&ev)));
    };

    let handle_category_change = move |ev: ev::Event| {
        match event_target_value(&ev).parse::<Category>() {
            Ok(category) => {
                ctx.dispatch(ShoppingEvent::PendingCategoryChanged(category));
            }
            Err(e) => web_sys::console::warn_1(&e.to_string().into()),
        }
    };

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(item) = ctx.dispatch(ShoppingEvent::Submitted) {
            on_item_added.run(item);
        }
    };

    view! {
        <form class=css::form on:submit=handle_submit>
            <label class=css::field>
                <span class=css::label>{labels::NAME}</span>
                <input
                    type="text"
                    name="name"
                    class=css::input
                    autocomplete="off"
                    prop:value=pending_name
                    on:input=handle_name_input
                />
            </label>

            <label class=css::field>
                <span class=css::label>{labels::CATEGORY}</span>
                <select
                    name="category"
                    class=css::select
                    prop:value=pending_category
                    on:change=handle_category_change
                >
                    {Category::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.as_str()>{c.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>

            <button type="submit" class=css::submit>
                <Icon icon=ic::PLUS />
                <span>{labels::SUBMIT}</span>
            </button>
        </form>
    }
}
