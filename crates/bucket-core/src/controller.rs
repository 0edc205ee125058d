//! Controller
//!
//! Owns the list, the displayed item, settings and the storage handle.
//! The presentation adapter calls the commands below and redraws from
//! `snapshot()`; nothing here knows about the DOM.

use log::{debug, info, warn};
use rand::Rng;

use crate::checklist::{self, ChecklistRow, Summary};
use crate::domain::{Item, ItemId, StorageResult};
use crate::intake::{self, Delimiter};
use crate::list::ItemList;
use crate::persistence::{self, KeyValueStore, LoadOutcome};
use crate::selector::{self, Pick};
use crate::settings::Settings;

/// Whether the display card is showing a freshly picked item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStatus {
    Showing,
    /// Fewer than two eligible items, so the card was left as it was
    #[default]
    Underflow,
}

/// Something the user should be told about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The saved list could not be read and was replaced by an empty one
    CorruptSave(String),
    /// The last save did not reach storage
    StorageFailed(String),
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::CorruptSave(reason) => {
                format!("Your saved list could not be read and was reset ({})", reason)
            }
            Notice::StorageFailed(reason) => format!("Changes could not be saved ({})", reason),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    EmptySubmission,
    NoCurrentItem,
    AlreadyComplete,
    NothingSelected,
    UnknownItem,
    EmptyList,
    Underflow,
}

/// Result of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    NoOp(NoOpReason),
}

/// Everything the view needs to draw itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub rows: Vec<ChecklistRow>,
    pub current: Option<ChecklistRow>,
    pub status: SelectionStatus,
    pub summary: Summary,
    pub notice: Option<Notice>,
    /// The list is empty and the entry dialog should be offered
    pub needs_entry: bool,
}

pub struct BucketList<S, R> {
    store: S,
    rng: R,
    settings: Settings,
    list: ItemList,
    current: Option<ItemId>,
    status: SelectionStatus,
    notice: Option<Notice>,
}

impl<S: KeyValueStore, R: Rng> BucketList<S, R> {
    /// Hydrate from storage and pick the first item to display
    pub fn open(store: S, settings: Settings, rng: R) -> StorageResult<Self> {
        let (list, notice) = match persistence::load(&store, &settings.storage_key)? {
            LoadOutcome::Loaded(records) => (ItemList::from_records(records), None),
            LoadOutcome::Absent => (ItemList::new(), None),
            LoadOutcome::Corrupt(reason) => (ItemList::new(), Some(Notice::CorruptSave(reason))),
        };
        info!("[Controller] Opened list with {} items", list.len());
        Ok(Self::with_list(store, settings, rng, list, notice))
    }

    /// Start with an empty list without reading storage
    pub fn empty(store: S, settings: Settings, rng: R, notice: Option<Notice>) -> Self {
        Self::with_list(store, settings, rng, ItemList::new(), notice)
    }

    fn with_list(store: S, settings: Settings, rng: R, list: ItemList, notice: Option<Notice>) -> Self {
        let mut bucket = Self {
            store,
            rng,
            settings,
            list,
            current: None,
            status: SelectionStatus::default(),
            notice,
        };
        bucket.reselect();
        bucket
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn items(&self) -> &ItemList {
        &self.list
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.current.and_then(|id| self.list.get(id))
    }

    pub fn status(&self) -> SelectionStatus {
        self.status
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn needs_entry(&self) -> bool {
        self.list.is_empty()
    }

    /// Parse the entry dialog text and append the items
    pub fn submit_items(&mut self, raw: &str, delimiter: Delimiter) -> StorageResult<Outcome> {
        let tasks = intake::parse(raw, delimiter);
        if tasks.is_empty() {
            debug!("[Controller] Empty submission ignored");
            return Ok(Outcome::NoOp(NoOpReason::EmptySubmission));
        }

        self.list.append(tasks);
        self.commit()
    }

    /// Show a different eligible item
    pub fn request_next(&mut self) -> Outcome {
        if self.reselect() {
            Outcome::Changed
        } else {
            Outcome::NoOp(NoOpReason::Underflow)
        }
    }

    /// Complete the displayed item, or toggle it back when un-completing is allowed
    pub fn mark_complete(&mut self) -> StorageResult<Outcome> {
        let Some(item) = self.current_item() else {
            return Ok(Outcome::NoOp(NoOpReason::NoCurrentItem));
        };
        let (id, complete) = (item.id, item.complete);

        if complete && !self.settings.allow_uncomplete {
            return Ok(Outcome::NoOp(NoOpReason::AlreadyComplete));
        }

        self.list.set_complete(id, !complete);
        self.commit()
    }

    pub fn remove_current(&mut self) -> StorageResult<Outcome> {
        let Some(id) = self.current_item().map(|item| item.id) else {
            return Ok(Outcome::NoOp(NoOpReason::NoCurrentItem));
        };

        self.list.remove(id);
        self.current = None;
        self.commit()
    }

    /// Toggle completion for checklist rows by position in the current render
    pub fn toggle_selected(&mut self, indices: &[usize]) -> StorageResult<Outcome> {
        let ids = self.list.resolve_indices(indices);
        self.toggle_selected_ids(&ids)
    }

    /// Delete checklist rows by position in the current render
    pub fn delete_selected(&mut self, indices: &[usize]) -> StorageResult<Outcome> {
        let ids = self.list.resolve_indices(indices);
        self.delete_selected_ids(&ids)
    }

    pub fn toggle_selected_ids(&mut self, ids: &[ItemId]) -> StorageResult<Outcome> {
        let changed = if self.settings.allow_uncomplete {
            self.list.toggle_complete_many(ids)
        } else {
            let active: Vec<ItemId> = ids
                .iter()
                .copied()
                .filter(|&id| self.list.get(id).is_some_and(|item| !item.complete))
                .collect();
            active
                .into_iter()
                .filter(|&id| self.list.set_complete(id, true))
                .count()
        };

        if changed == 0 {
            return Ok(Outcome::NoOp(NoOpReason::NothingSelected));
        }
        self.commit()
    }

    pub fn delete_selected_ids(&mut self, ids: &[ItemId]) -> StorageResult<Outcome> {
        let removed = self.list.delete_many(ids);
        if removed.is_empty() {
            return Ok(Outcome::NoOp(NoOpReason::NothingSelected));
        }
        debug!("[Controller] Deleted {} items", removed.len());
        self.commit()
    }

    /// Include or exclude an item from random display
    pub fn set_show(&mut self, id: ItemId, show: bool) -> StorageResult<Outcome> {
        if !self.list.set_show(id, show) {
            return Ok(Outcome::NoOp(NoOpReason::UnknownItem));
        }
        self.commit()
    }

    /// Delete every item
    pub fn clear(&mut self) -> StorageResult<Outcome> {
        if self.list.clear() == 0 {
            return Ok(Outcome::NoOp(NoOpReason::EmptyList));
        }
        self.commit()
    }

    /// Replace the settings, saving them and the list under the (possibly new) key
    pub fn update_settings(&mut self, settings: Settings) -> StorageResult<()> {
        settings.save(&self.store)?;
        let key_changed = settings.storage_key != self.settings.storage_key;
        self.settings = settings;
        self.reselect();
        if key_changed {
            self.persist()?;
        }
        Ok(())
    }

    pub fn snapshot(&self) -> ViewState {
        let rows = checklist::rows(&self.list, self.current_item().map(|item| item.id));
        let current = rows.iter().find(|row| row.current).cloned();
        ViewState {
            current,
            status: self.status,
            summary: checklist::summary(&self.list, self.settings.respect_visibility),
            notice: self.notice.clone(),
            needs_entry: self.needs_entry(),
            rows,
        }
    }

    /// The eligible pool changed: pick again, then save the whole list
    fn commit(&mut self) -> StorageResult<Outcome> {
        self.reselect();
        self.persist()?;
        Ok(Outcome::Changed)
    }

    /// Pick a new current item excluding the displayed one. On underflow the
    /// card is left as it is, unless its item no longer exists.
    fn reselect(&mut self) -> bool {
        if self.current.is_some_and(|id| !self.list.contains(id)) {
            self.current = None;
        }

        match selector::pick_from(
            &self.list,
            self.current,
            self.settings.respect_visibility,
            &mut self.rng,
        ) {
            Pick::Picked(id) => {
                self.current = Some(id);
                self.status = SelectionStatus::Showing;
                true
            }
            Pick::Underflow { eligible } => {
                debug!("[Controller] Only {} eligible items, keeping display", eligible);
                self.status = SelectionStatus::Underflow;
                false
            }
        }
    }

    fn persist(&mut self) -> StorageResult<()> {
        let records = self.list.to_records();
        match persistence::save(&self.store, &self.settings.storage_key, &records) {
            Ok(()) => {
                // a successful save also replaces any corrupt value
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!("[Controller] Save failed: {}", e);
                self.notice = Some(Notice::StorageFailed(e.to_string()));
                Err(e)
            }
        }
    }
}
