//! Property tests for persistence, selection and bulk deletion.

use bucket_core::list::ItemList;
use bucket_core::persistence::{self, LoadOutcome, MemoryStore};
use bucket_core::selector::{self, Pick};
use bucket_core::ItemRecord;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn record() -> impl Strategy<Value = ItemRecord> {
    ("[^\\s].{0,20}", any::<bool>(), any::<bool>()).prop_map(|(task, complete, show)| ItemRecord {
        task,
        complete,
        show,
    })
}

proptest! {
    #[test]
    fn saved_list_loads_back_unchanged(records in prop::collection::vec(record(), 0..20)) {
        let store = MemoryStore::new();
        persistence::save(&store, "bucket-list", &records).unwrap();
        prop_assert_eq!(persistence::load(&store, "bucket-list").unwrap(), LoadOutcome::Loaded(records));
    }

    #[test]
    fn pick_never_returns_excluded_item(len in 2usize..12, exclude_at in 0usize..12, seed in any::<u64>()) {
        let mut list = ItemList::new();
        list.append((0..len).map(|i| format!("item {}", i)));
        let exclude = list.as_slice()[exclude_at % len].id;
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..20 {
            match selector::pick_from(&list, Some(exclude), true, &mut rng) {
                Pick::Picked(id) => prop_assert_ne!(id, exclude),
                Pick::Underflow { .. } => prop_assert!(false, "pool of {} underflowed", len),
            }
        }
    }

    #[test]
    fn delete_at_removes_exactly_the_selected_rows(
        len in 0usize..15,
        selected in prop::collection::vec(0usize..20, 0..10),
    ) {
        let mut list = ItemList::new();
        list.append((0..len).map(|i| format!("item {}", i)));

        let expected: Vec<String> = (0..len)
            .filter(|i| !selected.contains(i))
            .map(|i| format!("item {}", i))
            .collect();

        list.delete_at(&selected);
        let remaining: Vec<String> = list.iter().map(|item| item.task.clone()).collect();
        prop_assert_eq!(remaining, expected);
    }
}
