//! Bucket List Core
//!
//! Layered the same way as the app that renders it:
//! - domain: items, ids, persisted records, errors
//! - intake / list / selector: pure list logic
//! - persistence / settings: whole-document storage behind `KeyValueStore`
//! - checklist: projection of the list into rows for the view
//! - controller: the command interface the presentation adapter calls

pub mod checklist;
pub mod controller;
pub mod domain;
pub mod intake;
pub mod list;
pub mod persistence;
pub mod selector;
pub mod settings;

pub use checklist::{ChecklistRow, Summary};
pub use controller::{BucketList, NoOpReason, Notice, Outcome, SelectionStatus, ViewState};
pub use domain::{Item, ItemId, ItemRecord, StorageError, StorageResult};
pub use intake::Delimiter;
pub use list::ItemList;
pub use persistence::{KeyValueStore, LoadOutcome, MemoryStore};
pub use selector::Pick;
pub use settings::Settings;
