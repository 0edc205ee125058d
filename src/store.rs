//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The controller
//! owns the real list; this store only mirrors its latest snapshot plus
//! view-only state (dialog, row selection).

use leptos::prelude::*;
use reactive_stores::Store;

use bucket_core::{ItemId, Settings, ViewState};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest controller snapshot
    pub view: ViewState,
    /// Entry dialog visibility
    pub dialog_open: bool,
    /// Unsubmitted text in the entry dialog
    pub draft: String,
    /// Checklist rows ticked for a bulk action
    pub selected: Vec<ItemId>,
    pub settings: Settings,
}

impl AppState {
    /// Hide the entry dialog and throw away whatever was typed into it
    pub fn dismiss_dialog(&mut self) {
        self.dialog_open = false;
        self.draft.clear();
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_close_dialog(store: &AppStore) {
    store.update(AppState::dismiss_dialog);
}

/// Tick or untick a checklist row
pub fn store_toggle_selected(store: &AppStore, id: ItemId) {
    store.selected().update(|selected| {
        if let Some(pos) = selected.iter().position(|&s| s == id) {
            selected.remove(pos);
        } else {
            selected.push(id);
        }
    });
}

/// Drop ticks for rows that no longer exist
pub fn store_prune_selected(store: &AppStore) {
    let live: Vec<ItemId> = store
        .view()
        .with_untracked(|view| view.rows.iter().map(|row| row.id).collect());
    store.selected().update(|selected| selected.retain(|id| live.contains(id)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_dialog_discards_draft() {
        let mut state = AppState {
            dialog_open: true,
            draft: "Skydiving\nLearn Spa".to_string(),
            ..AppState::default()
        };

        state.dismiss_dialog();

        assert!(!state.dialog_open);
        assert!(state.draft.is_empty());
    }
}
