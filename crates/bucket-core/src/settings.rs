//! Settings
//!
//! User-tunable behavior, stored as JSON next to the list. Missing fields
//! take their defaults, so older saves keep working as fields are added.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::StorageResult;
use crate::intake::Delimiter;
use crate::persistence::KeyValueStore;

/// Key the settings document is stored under
pub const SETTINGS_KEY: &str = "bucket-list:settings";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Key the list is saved under
    pub storage_key: String,
    /// Delimiter preselected in the entry dialog
    pub default_delimiter: Delimiter,
    /// Whether a completed item can be marked active again
    pub allow_uncomplete: bool,
    /// Whether hidden items are left out of random display
    pub respect_visibility: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_key: "bucket-list".to_string(),
            default_delimiter: Delimiter::Lines,
            allow_uncomplete: true,
            respect_visibility: true,
        }
    }
}

impl Settings {
    /// Read settings, falling back to defaults on anything unreadable
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let raw = match store.get(SETTINGS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("[Settings] Could not read settings: {}", e);
                return Self::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("[Settings] Ignoring unreadable settings: {}", e);
            Self::default()
        })
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &S) -> StorageResult<()> {
        let json = serde_json::to_string(self)?;
        store.set(SETTINGS_KEY, &json)
    }
}
