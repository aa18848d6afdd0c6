//! Deterministic random source shared by every generation step.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

const UNIT_SCALE: f64 = 1.0 / (1_u64 << 53) as f64;

pub struct HotelRng {
    inner: ChaCha8Rng,
}

impl HotelRng {
    pub fn from_seed(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Uniform value in `[0, 1)`.
    pub fn value(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * UNIT_SCALE
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.value() < probability
    }

    pub fn coin(&mut self) -> bool {
        self.chance(0.5)
    }

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        (self.inner.next_u64() % len as u64) as usize
    }

    /// Uniform value in `[min, max_exclusive)`; returns `min` for an empty range.
    pub fn range(&mut self, min: u32, max_exclusive: u32) -> u32 {
        if max_exclusive <= min {
            return min;
        }
        min + self.index((max_exclusive - min) as usize) as u32
    }

    pub fn digit(&mut self) -> u8 {
        self.index(10) as u8
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        Some(&items[self.index(items.len())])
    }

    /// Fisher-Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for upper in (1..items.len()).rev() {
            let swap_with = self.index(upper + 1);
            items.swap(upper, swap_with);
        }
    }

    /// Up to `count` distinct elements in random order.
    pub fn sample<T: Copy>(&mut self, items: &[T], count: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        self.shuffle(&mut pool);
        pool.truncate(count);
        pool
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;

    #[test]
    fn same_seed_produces_same_stream() {
        let mut a = HotelRng::from_seed(7);
        let mut b = HotelRng::from_seed(7);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn range_handles_empty_and_single_value_ranges() {
        let mut rng = HotelRng::from_seed(1);
        assert_eq!(rng.range(4, 4), 4);
        assert_eq!(rng.range(4, 2), 4);
        assert_eq!(rng.range(4, 5), 4);
    }

    #[test]
    fn choose_on_empty_slice_is_none() {
        let mut rng = HotelRng::from_seed(3);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = HotelRng::from_seed(11);
        let mut items: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut items);
        let unique: BTreeSet<u32> = items.iter().copied().collect();
        assert_eq!(unique.len(), 20);
    }

    #[test]
    fn digits_cover_all_decimal_values() {
        let mut rng = HotelRng::from_seed(5);
        let seen: BTreeSet<u8> = (0..500).map(|_| rng.digit()).collect();
        assert_eq!(seen, (0..10).collect());
    }

    proptest! {
        #[test]
        fn value_stays_in_unit_interval(seed in any::<u64>()) {
            let mut rng = HotelRng::from_seed(seed);
            for _ in 0..64 {
                let value = rng.value();
                prop_assert!((0.0..1.0).contains(&value));
            }
        }

        #[test]
        fn sample_returns_distinct_elements(seed in any::<u64>(), count in 0_usize..8) {
            let mut rng = HotelRng::from_seed(seed);
            let items = [1_u32, 2, 3, 4, 5];
            let picked = rng.sample(&items, count);
            prop_assert_eq!(picked.len(), count.min(items.len()));
            let unique: BTreeSet<u32> = picked.iter().copied().collect();
            prop_assert_eq!(unique.len(), picked.len());
        }
    }
}
