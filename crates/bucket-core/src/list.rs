//! List Store
//!
//! The ordered, in-memory collection of items. Insertion order is display
//! order. Every mutation addresses items by `ItemId`; positional bulk
//! operations resolve their indices to ids before touching the list.

use std::collections::HashSet;

use log::{debug, warn};

use crate::domain::{Item, ItemId, ItemRecord};

#[derive(Debug, Clone, Default)]
pub struct ItemList {
    items: Vec<Item>,
    next_id: u32,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from persisted records, assigning ids in order.
    /// Tasks are trimmed like on append; blank records are dropped.
    pub fn from_records(records: impl IntoIterator<Item = ItemRecord>) -> Self {
        let mut list = Self::new();
        for mut record in records {
            let trimmed = record.task.trim();
            if trimmed.is_empty() {
                warn!("[List] Dropping stored item with blank task");
                continue;
            }
            if trimmed.len() != record.task.len() {
                record.task = trimmed.to_string();
            }
            let id = list.allocate_id();
            list.items.push(Item::from_record(id, record));
        }
        list
    }

    pub fn to_records(&self) -> Vec<ItemRecord> {
        self.items.iter().map(Item::to_record).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Items eligible for random display
    pub fn eligible(&self, respect_visibility: bool) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.is_eligible(respect_visibility))
    }

    /// Trim each task and append it as an active, visible item.
    /// Tasks that are blank after trimming are skipped.
    pub fn append<I, S>(&mut self, tasks: I) -> Vec<ItemId>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = Vec::new();
        for task in tasks {
            let task = task.as_ref().trim();
            if task.is_empty() {
                debug!("[List] Skipping blank task");
                continue;
            }
            let id = self.allocate_id();
            self.items.push(Item::new(id, task.to_string()));
            added.push(id);
        }
        debug!("[List] Appended {} items, total {}", added.len(), self.items.len());
        added
    }

    /// Remove an item by id
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Set completion; returns false if the id is unknown
    pub fn set_complete(&mut self, id: ItemId, value: bool) -> bool {
        self.with_item(id, |item| item.complete = value)
    }

    pub fn toggle_complete(&mut self, id: ItemId) -> bool {
        self.with_item(id, |item| item.complete = !item.complete)
    }

    pub fn set_show(&mut self, id: ItemId, value: bool) -> bool {
        self.with_item(id, |item| item.show = value)
    }

    /// Map row indices to ids. Out-of-range and repeated indices are dropped.
    pub fn resolve_indices(&self, indices: &[usize]) -> Vec<ItemId> {
        let mut seen = HashSet::new();
        indices
            .iter()
            .filter(|&&index| seen.insert(index))
            .filter_map(|&index| self.items.get(index).map(|item| item.id))
            .collect()
    }

    /// Flip `complete` for the items at the given rows
    pub fn toggle_complete_at(&mut self, indices: &[usize]) -> usize {
        let ids = self.resolve_indices(indices);
        self.toggle_complete_many(&ids)
    }

    /// Delete the items at the given rows, in any order
    pub fn delete_at(&mut self, indices: &[usize]) -> Vec<Item> {
        let ids = self.resolve_indices(indices);
        self.delete_many(&ids)
    }

    pub fn toggle_complete_many(&mut self, ids: &[ItemId]) -> usize {
        let unique: HashSet<ItemId> = ids.iter().copied().collect();
        unique
            .into_iter()
            .filter(|&id| self.toggle_complete(id))
            .count()
    }

    pub fn delete_many(&mut self, ids: &[ItemId]) -> Vec<Item> {
        let targets: HashSet<ItemId> = ids.iter().copied().collect();
        let (removed, kept): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| targets.contains(&item.id));
        self.items = kept;
        removed
    }

    /// Remove every item; ids keep counting up
    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    fn allocate_id(&mut self) -> ItemId {
        self.next_id += 1;
        ItemId(self.next_id)
    }

    fn with_item(&mut self, id: ItemId, f: impl FnOnce(&mut Item)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                f(item);
                true
            }
            None => {
                warn!("[List] No item with id {}", id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tasks(list: &ItemList) -> Vec<&str> {
        list.iter().map(|item| item.task.as_str()).collect()
    }

    fn abcd() -> ItemList {
        let mut list = ItemList::new();
        list.append(["A", "B", "C", "D"]);
        list
    }

    #[test]
    fn test_append_trims_and_defaults() {
        let mut list = ItemList::new();
        let ids = list.append(["  Skydiving ", "Learn Spanish"]);

        assert_eq!(ids.len(), 2);
        assert_eq!(tasks(&list), vec!["Skydiving", "Learn Spanish"]);
        assert!(list.iter().all(|item| !item.complete && item.show));
    }

    #[test]
    fn test_append_skips_blank() {
        let mut list = ItemList::new();
        let ids = list.append(["", "   ", "x"]);
        assert_eq!(ids.len(), 1);
        assert_eq!(tasks(&list), vec!["x"]);
    }

    #[test]
    fn test_duplicate_tasks_are_distinct() {
        let mut list = ItemList::new();
        let ids = list.append(["same", "same"]);
        assert_ne!(ids[0], ids[1]);

        list.remove(ids[1]);
        assert_eq!(list.len(), 1);
        assert!(list.contains(ids[0]));
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut list = abcd();
        assert!(list.remove(ItemId(99)).is_none());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_set_and_toggle_complete() {
        let mut list = abcd();
        let id = list.as_slice()[0].id;

        assert!(list.set_complete(id, true));
        assert!(list.get(id).unwrap().complete);
        assert!(list.toggle_complete(id));
        assert!(!list.get(id).unwrap().complete);
        assert!(!list.toggle_complete(ItemId(99)));
    }

    #[test]
    fn test_delete_at_handles_index_shift() {
        let mut list = abcd();
        let removed = list.delete_at(&[0, 2]);

        assert_eq!(removed.len(), 2);
        assert_eq!(tasks(&list), vec!["B", "D"]);
    }

    #[test]
    fn test_delete_at_order_independent() {
        let mut list = abcd();
        list.delete_at(&[2, 0]);
        assert_eq!(tasks(&list), vec!["B", "D"]);
    }

    #[test]
    fn test_delete_at_ignores_out_of_range_and_repeats() {
        let mut list = abcd();
        let removed = list.delete_at(&[3, 3, 10]);
        assert_eq!(removed.len(), 1);
        assert_eq!(tasks(&list), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_toggle_complete_at_only_touches_selected() {
        let mut list = ItemList::new();
        list.append(["A", "B", "C"]);

        assert_eq!(list.toggle_complete_at(&[1]), 1);

        let flags: Vec<bool> = list.iter().map(|item| item.complete).collect();
        assert_eq!(flags, vec![false, true, false]);
    }

    #[test]
    fn test_toggle_complete_at_repeated_index_flips_once() {
        let mut list = ItemList::new();
        list.append(["A", "B"]);
        list.toggle_complete_at(&[0, 0]);
        assert!(list.as_slice()[0].complete);
    }

    #[test]
    fn test_eligible_respects_visibility() {
        let mut list = abcd();
        let ids: Vec<ItemId> = list.iter().map(|item| item.id).collect();
        list.set_complete(ids[0], true);
        list.set_show(ids[1], false);

        let visible: Vec<&str> = list.eligible(true).map(|i| i.task.as_str()).collect();
        assert_eq!(visible, vec!["C", "D"]);

        let all: Vec<&str> = list.eligible(false).map(|i| i.task.as_str()).collect();
        assert_eq!(all, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_records_round_trip() {
        let mut list = abcd();
        let id = list.as_slice()[2].id;
        list.set_complete(id, true);

        let records = list.to_records();
        let restored = ItemList::from_records(records.clone());
        assert_eq!(restored.to_records(), records);
    }

    #[test]
    fn test_from_records_trims_and_drops_blank() {
        let records = vec![
            ItemRecord::new("   "),
            ItemRecord::new("  padded  "),
            ItemRecord::new("x"),
        ];
        let list = ItemList::from_records(records);
        assert_eq!(tasks(&list), vec!["padded", "x"]);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut list = abcd();
        let last = list.as_slice()[3].id;
        assert_eq!(list.clear(), 4);
        let ids = list.append(["E"]);
        assert!(ids[0] > last);
    }
}
