//! Settings Bar Component
//!
//! Behavior toggles and the clear-all action.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn SettingsBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let clear_all = Callback::new(move |_: ()| ctx.run("clear", |c| c.clear()));

    view! {
        <section class="settings">
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || store.settings().with(|s| s.allow_uncomplete)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ctx.update_settings(|s| s.allow_uncomplete = checked);
                    }
                />
                "Completed items can be reopened"
            </label>
            <label>
                <input
                    type="checkbox"
                    prop:checked=move || store.settings().with(|s| s.respect_visibility)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        ctx.update_settings(|s| s.respect_visibility = checked);
                    }
                />
                "Hidden items stay out of the shuffle"
            </label>
            <Show when=move || store.view().with(|view| view.summary.total > 0)>
                <DeleteConfirmButton button_class="delete-btn" label="Clear list" on_confirm=clear_all />
            </Show>
        </section>
    }
}
