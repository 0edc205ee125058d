//! Bucket List App
//!
//! Wires storage, controller and view store together and lays out the page:
//! display card, checklist, settings, and the entry dialog on top.

use leptos::ev;
use leptos::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reactive_stores::Store;

use bucket_core::{BucketList, Notice, Settings};

use crate::components::{ChecklistPanel, EntryDialog, ItemCard, NoticeBar, SettingsBar};
use crate::context::{AppContext, AppController};
use crate::storage::BrowserStore;
use crate::store::AppState;

/// Load the saved list, or start empty in memory if storage cannot be read
fn open_controller() -> AppController {
    let (storage, unavailable) = BrowserStore::open();
    let settings = Settings::load(&storage);
    let fallback_settings = settings.clone();

    if let Some(e) = unavailable {
        return BucketList::empty(
            storage,
            settings,
            StdRng::from_entropy(),
            Some(Notice::StorageFailed(e.to_string())),
        );
    }

    match BucketList::open(storage, settings, StdRng::from_entropy()) {
        Ok(controller) => controller,
        Err(e) => {
            log::error!("[App] Could not read saved list: {}", e);
            let (storage, _) = BrowserStore::open();
            BucketList::empty(
                storage,
                fallback_settings,
                StdRng::from_entropy(),
                Some(Notice::StorageFailed(e.to_string())),
            )
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let controller = open_controller();
    let store = Store::new(AppState {
        view: controller.snapshot(),
        // an empty list prompts for items straight away
        dialog_open: controller.needs_entry(),
        draft: String::new(),
        selected: Vec::new(),
        settings: controller.settings().clone(),
    });

    let ctx = AppContext::new(controller, store);
    provide_context(ctx);

    // Escape dismisses the entry dialog without touching the list
    let _escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ctx.close_dialog();
        }
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Bucket List"</h1>

                <NoticeBar />

                <ItemCard />

                <ChecklistPanel />

                <SettingsBar />
            </main>

            <EntryDialog />
        </div>
    }
}
