//! Random Selector
//!
//! Picks an eligible item different from the one currently displayed.

use rand::Rng;

use crate::domain::{Item, ItemId};
use crate::list::ItemList;

/// Result of a pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Picked(ItemId),
    /// Fewer than two eligible items; the display stays as it is
    Underflow { eligible: usize },
}

/// Uniformly sample from `pool`, redrawing while the sample is `exclude`.
///
/// With two or more candidates at least one differs from `exclude`, so the
/// loop terminates.
pub fn pick<'a, I, R>(pool: I, exclude: Option<ItemId>, rng: &mut R) -> Pick
where
    I: IntoIterator<Item = &'a Item>,
    R: Rng + ?Sized,
{
    let candidates: Vec<ItemId> = pool.into_iter().map(|item| item.id).collect();
    if candidates.len() <= 1 {
        return Pick::Underflow {
            eligible: candidates.len(),
        };
    }

    loop {
        let candidate = candidates[rng.gen_range(0..candidates.len())];
        if Some(candidate) != exclude {
            return Pick::Picked(candidate);
        }
    }
}

/// Pick from the eligible items of a list
pub fn pick_from<R>(list: &ItemList, exclude: Option<ItemId>, respect_visibility: bool, rng: &mut R) -> Pick
where
    R: Rng + ?Sized,
{
    pick(list.eligible(respect_visibility), exclude, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn list_of(tasks: &[&str]) -> ItemList {
        let mut list = ItemList::new();
        list.append(tasks.iter().copied());
        list
    }

    #[test]
    fn test_pick_never_returns_exclude() {
        let list = list_of(&["A", "B"]);
        let exclude = list.as_slice()[0].id;
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            assert_eq!(
                pick_from(&list, Some(exclude), true, &mut rng),
                Pick::Picked(list.as_slice()[1].id)
            );
        }
    }

    #[test]
    fn test_pick_underflow_on_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(1);

        let empty = ItemList::new();
        assert_eq!(pick_from(&empty, None, true, &mut rng), Pick::Underflow { eligible: 0 });

        let single = list_of(&["only"]);
        assert_eq!(pick_from(&single, None, true, &mut rng), Pick::Underflow { eligible: 1 });
    }

    #[test]
    fn test_pick_skips_complete_and_hidden() {
        let mut list = list_of(&["A", "B", "C", "D"]);
        let ids: Vec<ItemId> = list.iter().map(|item| item.id).collect();
        list.set_complete(ids[0], true);
        list.set_show(ids[1], false);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..100 {
            match pick_from(&list, None, true, &mut rng) {
                Pick::Picked(id) => assert!(id == ids[2] || id == ids[3]),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_pick_ignores_visibility_when_disabled() {
        let mut list = list_of(&["A", "B"]);
        let hidden = list.as_slice()[1].id;
        list.set_show(hidden, false);
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(pick_from(&list, None, true, &mut rng), Pick::Underflow { eligible: 1 });
        assert!(matches!(pick_from(&list, None, false, &mut rng), Pick::Picked(_)));
    }

    #[test]
    fn test_pick_reaches_every_candidate() {
        let list = list_of(&["A", "B", "C"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..300 {
            if let Pick::Picked(id) = pick_from(&list, None, true, &mut rng) {
                seen.insert(id);
            }
        }
        assert_eq!(seen.len(), 3);
    }
}
