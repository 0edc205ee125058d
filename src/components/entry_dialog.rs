//! Entry Dialog Component
//!
//! Modal form for adding several items at once. The typed text lives in the
//! store so closing the dialog can discard it.

use leptos::prelude::*;

use bucket_core::Delimiter;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

const DELIMITERS: [Delimiter; 2] = [Delimiter::Lines, Delimiter::Commas];

#[component]
pub fn EntryDialog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let draft = store.draft();
    let (delimiter, set_delimiter) = signal(store.settings().with_untracked(|s| s.default_delimiter));

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        ctx.close_dialog();
        if text.is_empty() {
            return;
        }

        let delimiter = delimiter.get_untracked();
        ctx.run("submit_items", move |c| c.submit_items(&text, delimiter));
    };

    view! {
        <Show when=move || store.dialog_open().get()>
            <div class="modal">
                <form class="modal-content" on:submit=submit>
                    <button type="button" class="close-btn" on:click=move |_| ctx.close_dialog()>"×"</button>
                    <h2>"Add items"</h2>

                    <textarea
                        name="items"
                        rows="8"
                        placeholder="Skydiving, Learn Spanish, Visit Japan..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>

                    <div class="delimiter-row">
                        {DELIMITERS.into_iter().map(|value| view! {
                            <label>
                                <input
                                    type="radio"
                                    name="delimiter"
                                    value=value.as_str()
                                    prop:checked=move || delimiter.get() == value
                                    on:change=move |ev| {
                                        set_delimiter.set(Delimiter::from_form_value(&event_target_value(&ev)))
                                    }
                                />
                                {value.label()}
                            </label>
                        }).collect_view()}
                    </div>

                    <button type="submit">"Add"</button>
                </form>
            </div>
        </Show>
    }
}
