//! Domain Layer
//!
//! Entities and error types shared by every other module.
//! Nothing in here touches storage or randomness.

mod error;
mod item;

pub use error::{StorageError, StorageResult};
pub use item::{Item, ItemId, ItemRecord};
