//! Item Card Component
//!
//! Shows the current item with its actions.

use leptos::prelude::*;

use bucket_core::SelectionStatus;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ItemCard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let current = move || store.view().with(|view| view.current.clone());
    let has_current = move || store.view().with(|view| view.current.is_some());
    let underflow = move || {
        store.view().with(|view| view.status == SelectionStatus::Underflow && view.summary.total > 0)
    };

    view! {
        <section class="card">
            <p class=move || {
                if current().is_some_and(|row| row.complete) { "task completed" } else { "task" }
            }>
                {move || current().map(|row| row.task).unwrap_or_else(|| "Nothing to show yet".to_string())}
            </p>

            <Show when=underflow>
                <p class="hint">"Fewer than two open items, so there is nothing new to show."</p>
            </Show>

            <div class="card-actions">
                <button on:click=move |_| ctx.run("request_next", |c| Ok(c.request_next()))>
                    "Show another"
                </button>
                <button
                    disabled=move || !has_current()
                    on:click=move |_| ctx.run("mark_complete", |c| c.mark_complete())
                >
                    {move || if store.settings().with(|s| s.allow_uncomplete) { "Toggle complete" } else { "Mark complete" }}
                </button>
                <button
                    class="delete-btn"
                    disabled=move || !has_current()
                    on:click=move |_| ctx.run("remove_current", |c| c.remove_current())
                >
                    "Remove"
                </button>
                <button class="add-btn" on:click=move |_| ctx.open_dialog()>"Add items"</button>
            </div>
        </section>
    }
}
