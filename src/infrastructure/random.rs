use crate::domain::ports::NumberPicker;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::index;

/// Picks numbers uniformly with any `rand` generator.
///
/// `RandomPicker::default()` uses the thread-local generator, which is seeded
/// from the OS, so draws differ on every run.
#[derive(Debug, Clone)]
pub struct RandomPicker<R: Rng = ThreadRng> {
    rng: R,
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NumberPicker for RandomPicker<R> {
    fn pick_unique(&mut self, min: u8, max: u8, count: usize) -> Vec<u8> {
        if min > max {
            return Vec::new();
        }
        let span = usize::from(max - min) + 1;
        index::sample(&mut self.rng, span, count.min(span))
            .into_iter()
            .map(|offset| min + offset as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_picks_distinct_numbers_in_range() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(7));
        for _ in 0..500 {
            let numbers = picker.pick_unique(1, 45, 6);
            assert_eq!(numbers.len(), 6);
            assert!(numbers.iter().all(|n| (1..=45).contains(n)));
            let distinct: HashSet<_> = numbers.iter().collect();
            assert_eq!(distinct.len(), 6);
        }
    }

    #[test]
    fn test_every_number_is_reachable() {
        let mut picker = RandomPicker::default();
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            seen.extend(picker.pick_unique(1, 45, 6));
        }
        assert_eq!(seen.len(), 45);
    }

    #[test]
    fn test_count_larger_than_range_is_clamped() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(1));
        let mut numbers = picker.pick_unique(1, 3, 6);
        numbers.sort_unstable();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_full_range_upper_bound() {
        let mut picker = RandomPicker::new(StdRng::seed_from_u64(3));
        let numbers = picker.pick_unique(0, u8::MAX, 256);
        assert_eq!(numbers.len(), 256);
    }
}
