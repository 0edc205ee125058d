//! Item Entity
//!
//! A single bucket list entry. Identity is the `ItemId` assigned by the
//! list, so two entries with the same task text stay distinct.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of an item within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A bucket list entry held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier (not persisted)
    pub id: ItemId,
    /// Task text, trimmed and never empty
    pub task: String,
    /// Completion status
    pub complete: bool,
    /// Whether the item takes part in random display
    pub show: bool,
}

impl Item {
    /// Create a new active, visible item
    pub fn new(id: ItemId, task: String) -> Self {
        Self {
            id,
            task,
            complete: false,
            show: true,
        }
    }

    /// Rebuild an item from its persisted record under a fresh id
    pub fn from_record(id: ItemId, record: ItemRecord) -> Self {
        Self {
            id,
            task: record.task,
            complete: record.complete,
            show: record.show,
        }
    }

    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            task: self.task.clone(),
            complete: self.complete,
            show: self.show,
        }
    }

    /// Check whether the item may be chosen for display
    pub fn is_eligible(&self, respect_visibility: bool) -> bool {
        !self.complete && (self.show || !respect_visibility)
    }
}

/// Persisted shape of an item: `{ task, complete, show }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub task: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default = "default_true")]
    pub show: bool,
}

impl ItemRecord {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            task: task.into(),
            complete: false,
            show: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = Item::new(ItemId(1), "Skydiving".to_string());
        assert_eq!(item.id, ItemId(1));
        assert_eq!(item.task, "Skydiving");
        assert!(!item.complete);
        assert!(item.show);
    }

    #[test]
    fn test_eligibility() {
        let mut item = Item::new(ItemId(1), "Visit Japan".to_string());
        assert!(item.is_eligible(true));

        item.show = false;
        assert!(!item.is_eligible(true));
        assert!(item.is_eligible(false));

        item.show = true;
        item.complete = true;
        assert!(!item.is_eligible(true));
        assert!(!item.is_eligible(false));
    }

    #[test]
    fn test_record_defaults_missing_flags() {
        let record: ItemRecord = serde_json::from_str(r#"{"task":"Learn Spanish"}"#).unwrap();
        assert_eq!(record, ItemRecord::new("Learn Spanish"));
    }

    #[test]
    fn test_record_field_names() {
        let json = serde_json::to_string(&ItemRecord::new("Skydiving")).unwrap();
        assert_eq!(json, r#"{"task":"Skydiving","complete":false,"show":true}"#);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ItemId(7).to_string(), "#7");
    }
}
