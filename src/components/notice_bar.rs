//! Notice Bar Component
//!
//! Storage problems reported by the controller.

use leptos::prelude::*;

use bucket_core::Notice;

use crate::context::AppContext;
use crate::store::AppStateStoreFields;

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    let message = move || store.view().with(|view| view.notice.as_ref().map(Notice::message));

    view! {
        {move || message().map(|text| view! {
            <div class="notice">
                <span>{text}</span>
                <button class="close-btn" on:click=move |_| ctx.dismiss_notice()>"×"</button>
            </div>
        })}
    }
}
