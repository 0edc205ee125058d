//! Checklist Item Component
//!
//! A single checklist row. The tick box selects the row for bulk actions;
//! the row is keyed by item id, not by position.

use leptos::prelude::*;

use bucket_core::ChecklistRow;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn ChecklistItem(row: ChecklistRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let id = row.id;
    let show = row.show;
    let is_selected = move || store.selected().with(|selected| selected.contains(&id));

    let mut row_class = String::from("item-row");
    if row.current {
        row_class.push_str(" current");
    }
    if !row.show {
        row_class.push_str(" hidden");
    }

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                prop:checked=is_selected
                on:change=move |_| ctx.toggle_selected(id)
            />
            <span class=if row.complete { "item-text completed" } else { "item-text" }>
                {row.task}
            </span>
            <button
                class="visibility-btn"
                title=if show { "Leave out of the shuffle" } else { "Put back into the shuffle" }
                on:click=move |_| ctx.run("set_show", move |c| c.set_show(id, !show))
            >
                {if show { "Hide" } else { "Show" }}
            </button>
        </li>
    }
}
