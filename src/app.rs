//! Root application module.
//!
//! Contains the main App component and the AppContext that exposes the
//! shopping session to every component.

use leptos::prelude::*;
use shopping_list_core::{FilterState, Item, ItemForm, ListSummary, ShoppingEvent, ShoppingSession};

use crate::components::ShoppingList;
use crate::config::seed_items;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Wraps a single [`ShoppingSession`] in a signal. Components read slices of
/// it through the derived accessors and change it only through
/// [`dispatch`](Self::dispatch), so every update is one
/// [`ShoppingEvent`] applied to a settled state.
///
/// # Note
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct AppContext {
    session: RwSignal<ShoppingSession>,
}

impl AppContext {
    /// Creates a context holding a session seeded with `items`.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            session: RwSignal::new(ShoppingSession::with_items(items)),
        }
    }

    /// Applies an event to the session.
    ///
    /// Returns the created item when the event is a form submission.
    pub fn dispatch(&self, event: ShoppingEvent) -> Option<Item> {
        self.session.try_update(|s| s.apply(event)).flatten()
    }

    /// Items passing the current filter.
    ///
    /// Memoized, so typing into the form does not re-render the list.
    pub fn visible_items(&self) -> Memo<Vec<Item>> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.visible_items()))
    }

    pub fn summary(&self) -> Memo<ListSummary> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.summary()))
    }

    pub fn filter(&self) -> Memo<FilterState> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.filter().clone()))
    }

    pub fn form(&self) -> Memo<ItemForm> {
        let session = self.session;
        Memo::new(move |_| session.with(|s| s.form().clone()))
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(seed_items())
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the shopping list
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::default());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    font-family: system-ui, sans-serif;
                ">
                    <h1 style="color: #c0392b; margin-bottom: 1rem;">
                        "Something went wrong"
                    </h1>
                    <ul style="margin-bottom: 2rem; color: #c0392b;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                        style="padding: 0.5rem 1.5rem; cursor: pointer;"
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <ShoppingList />
        </ErrorBoundary>
    }
}
