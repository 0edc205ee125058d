//! Application Context
//!
//! The controller and the view store, provided via Leptos Context API.
//! Components call commands through `run`, which redraws afterwards.

use leptos::prelude::*;
use rand::rngs::StdRng;

use bucket_core::{BucketList, ItemId, Outcome, Settings, StorageResult};

use crate::storage::BrowserStore;
use crate::store::{
    store_close_dialog, store_prune_selected, store_toggle_selected, AppStateStoreFields, AppStore,
};

pub type AppController = BucketList<BrowserStore, StdRng>;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Owns the list; not `Send`, so kept in local storage
    controller: StoredValue<AppController, LocalStorage>,
    /// View state mirrored from the controller
    pub store: AppStore,
}

impl AppContext {
    pub fn new(controller: AppController, store: AppStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            store,
        }
    }

    /// Run a command against the controller, then redraw from its snapshot
    pub fn run(&self, name: &str, command: impl FnOnce(&mut AppController) -> StorageResult<Outcome>) {
        let mut result = None;
        self.controller.update_value(|controller| result = Some(command(controller)));

        match result {
            Some(Ok(Outcome::Changed)) => log::debug!("[App] {} applied", name),
            Some(Ok(Outcome::NoOp(reason))) => log::debug!("[App] {} skipped: {:?}", name, reason),
            Some(Err(e)) => log::error!("[App] {} failed: {}", name, e),
            None => log::error!("[App] {} ran after the controller was disposed", name),
        }
        self.refresh();
    }

    /// Copy the controller snapshot into the store
    pub fn refresh(&self) {
        if let Some(view) = self.controller.try_with_value(|controller| controller.snapshot()) {
            self.store.view().set(view);
            store_prune_selected(&self.store);
        }
    }

    pub fn update_settings(&self, change: impl FnOnce(&mut Settings)) {
        let mut settings = self.store.settings().get_untracked();
        change(&mut settings);

        let next = settings.clone();
        let mut result: StorageResult<()> = Ok(());
        self.controller.update_value(|controller| result = controller.update_settings(next));
        if let Err(e) = result {
            log::error!("[App] Saving settings failed: {}", e);
        }

        self.store.settings().set(settings);
        self.refresh();
    }

    pub fn dismiss_notice(&self) {
        self.controller.update_value(|controller| controller.dismiss_notice());
        self.refresh();
    }

    pub fn open_dialog(&self) {
        self.store.dialog_open().set(true);
    }

    pub fn close_dialog(&self) {
        store_close_dialog(&self.store);
    }

    pub fn toggle_selected(&self, id: ItemId) {
        store_toggle_selected(&self.store, id);
    }
}
