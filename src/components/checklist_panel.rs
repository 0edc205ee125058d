//! Checklist Panel Component
//!
//! Every item as a row, with bulk toggle/delete over the ticked rows.

use leptos::prelude::*;

use crate::components::{ChecklistItem, DeleteConfirmButton};
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ChecklistPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let rows = move || store.view().with(|view| view.rows.clone());
    let nothing_selected = move || store.selected().with(|selected| selected.is_empty());

    let delete_selected = Callback::new(move |_: ()| {
        let ids = store.selected().get_untracked();
        ctx.run("delete_selected", move |c| c.delete_selected_ids(&ids));
    });

    view! {
        <section class="checklist">
            <h2>"Checklist"</h2>

            <ul class="checklist-rows">
                <For
                    each=rows
                    key=|row| {
                        // every field the row draws, so a change re-renders it
                        (row.id, row.index, row.task.clone(), row.complete, row.show, row.current)
                    }
                    children=move |row| view! { <ChecklistItem row=row /> }
                />
            </ul>

            <div class="checklist-actions">
                <button
                    disabled=nothing_selected
                    on:click=move |_| {
                        let ids = store.selected().get_untracked();
                        ctx.run("toggle_selected", move |c| c.toggle_selected_ids(&ids));
                    }
                >
                    "Toggle selected"
                </button>
                <Show when=move || !nothing_selected()>
                    <DeleteConfirmButton
                        button_class="delete-btn"
                        label="Delete selected"
                        on_confirm=delete_selected
                    />
                </Show>
            </div>

            <p class="item-count">
                {move || {
                    let summary = store.view().with(|view| view.summary);
                    format!(
                        "{} items, {} complete, {} in rotation",
                        summary.total, summary.complete, summary.eligible
                    )
                }}
            </p>
        </section>
    }
}
