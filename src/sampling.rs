use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SAMPLE_COUNT: usize = 4;

/// Selects up to `count` items uniformly at random without replacement.
/// A list that already fits within `count` is returned whole, in its
/// original order. The input is never mutated.
pub fn sample<T: Clone>(rng: &mut impl Rng, items: &[T], count: usize) -> Vec<T> {
    if items.len() <= count {
        return items.to_vec();
    }
    items.choose_multiple(rng, count).cloned().collect()
}

/// The default selection used by the item fallbacks and category filtering.
pub fn sample_default<T: Clone>(items: &[T]) -> Vec<T> {
    sample(&mut rand::thread_rng(), items, DEFAULT_SAMPLE_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn short_lists_come_back_whole_and_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec!["a", "b", "c"];
        assert_eq!(sample(&mut rng, &items, 4), items);
        assert_eq!(sample(&mut rng, &items, 3), items);
    }

    #[test]
    fn long_lists_yield_exactly_count_distinct_members() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<u32> = (0..20).collect();
        let picked = sample(&mut rng, &items, 4);
        assert_eq!(picked.len(), 4);
        for value in &picked {
            assert!(items.contains(value));
        }
        let mut deduped = picked.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), picked.len(), "duplicate selection");
    }

    #[test]
    fn seeded_rng_makes_selection_deterministic() {
        let items: Vec<u32> = (0..50).collect();
        let first = sample(&mut StdRng::seed_from_u64(99), &items, 5);
        let second = sample(&mut StdRng::seed_from_u64(99), &items, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn input_is_left_untouched() {
        let items: Vec<u32> = (0..10).collect();
        let copy = items.clone();
        let _ = sample(&mut StdRng::seed_from_u64(1), &items, 3);
        assert_eq!(items, copy);
    }
}
