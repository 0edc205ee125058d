//! List Renderer
//!
//! Projects the list into checklist rows. The view redraws from these rows
//! after every command; rows carry the item id so row controls never depend
//! on a stale position.

use crate::domain::{Item, ItemId};
use crate::list::ItemList;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistRow {
    pub id: ItemId,
    /// Position in the current render
    pub index: usize,
    pub task: String,
    pub complete: bool,
    pub show: bool,
    /// This row is the item on the display card
    pub current: bool,
}

impl ChecklistRow {
    fn from_item(index: usize, item: &Item, current: Option<ItemId>) -> Self {
        Self {
            id: item.id,
            index,
            task: item.task.clone(),
            complete: item.complete,
            show: item.show,
            current: current == Some(item.id),
        }
    }
}

/// Counts shown under the checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub complete: usize,
    pub eligible: usize,
}

pub fn rows(list: &ItemList, current: Option<ItemId>) -> Vec<ChecklistRow> {
    list.iter()
        .enumerate()
        .map(|(index, item)| ChecklistRow::from_item(index, item, current))
        .collect()
}

pub fn summary(list: &ItemList, respect_visibility: bool) -> Summary {
    Summary {
        total: list.len(),
        complete: list.iter().filter(|item| item.complete).count(),
        eligible: list.eligible(respect_visibility).count(),
    }
}
