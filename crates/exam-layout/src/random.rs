//! Seeded pseudo-random source.
//!
//! [`SeededRandom`] is a linear congruential generator. Given the same seed it
//! produces the same stream on every platform. It never reads the clock or any
//! entropy source. Every layout ever issued was drawn from this exact
//! recurrence, so its constants and the shuffle traversal order must not
//! change.

/// Multiplier of the recurrence.
const MULTIPLIER: u64 = 9301;
/// Increment of the recurrence.
const INCREMENT: u64 = 49297;
/// Modulus of the recurrence; every state lies in `[0, MODULUS)`.
const MODULUS: u64 = 233_280;

/// Deterministic random stream built from a single integer seed.
///
/// Each call to [`next`](Self::next) advances
/// `state = (state * 9301 + 49297) mod 233280` and returns `state / 233280`.
///
/// # Examples
///
/// ```
/// use exam_layout::random::SeededRandom;
///
/// let mut rng = SeededRandom::new(12345);
/// assert_eq!(rng.shuffle(&[0, 1, 2, 3]), vec![3, 2, 0, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Creates a generator from `seed`.
    ///
    /// The seed is reduced modulo 233280 up front. Every later state is
    /// identical to the unreduced recurrence, and the multiplication cannot
    /// overflow.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Returns the current internal state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the generator and returns a value in `[0, 1)`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Returns an integer in `[min, max]`, both inclusive.
    ///
    /// Returns `min` without drawing when `max < min`.
    pub fn next_int(&mut self, min: usize, max: usize) -> usize {
        if max < min {
            return min;
        }
        let span = (max - min + 1) as f64;
        min + (self.next() * span).floor() as usize
    }

    /// Shuffles `items` in place.
    ///
    /// Visits indices from the last down to 1 and swaps each with an index
    /// drawn from `[0, i]`. Slices shorter than two elements draw nothing.
    pub fn shuffle_in_place<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_int(0, i);
            items.swap(i, j);
        }
    }

    /// Returns a shuffled copy of `items`.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut shuffled = items.to_vec();
        self.shuffle_in_place(&mut shuffled);
        shuffled
    }

    /// Returns a shuffled identity list `[0, len)`.
    pub fn permutation(&mut self, len: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..len).collect();
        self.shuffle_in_place(&mut order);
        order
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Property Test Functions
    // ===================

    /// Every draw lies in `[0, 1)`.
    fn check_next_in_unit_interval(seed: u64, draws: usize) -> Result<(), TestCaseError> {
        let mut rng = SeededRandom::new(seed);
        for _ in 0..draws {
            let value = rng.next();
            prop_assert!((0.0..1.0).contains(&value), "draw {value} out of range");
        }
        Ok(())
    }

    /// `next_int` stays within its inclusive bounds.
    fn check_next_int_in_bounds(seed: u64, min: usize, width: usize) -> Result<(), TestCaseError> {
        let mut rng = SeededRandom::new(seed);
        let max = min + width;
        for _ in 0..32 {
            let value = rng.next_int(min, max);
            prop_assert!(value >= min && value <= max, "{value} outside [{min}, {max}]");
        }
        Ok(())
    }

    /// A shuffle keeps every element exactly once.
    fn check_shuffle_is_permutation(seed: u64, len: usize) -> Result<(), TestCaseError> {
        let mut rng = SeededRandom::new(seed);
        let mut order = rng.permutation(len);
        order.sort_unstable();
        prop_assert_eq!(order, (0..len).collect::<Vec<_>>());
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn next_in_unit_interval(seed in any::<u64>(), draws in 1usize..200) {
            check_next_in_unit_interval(seed, draws)?;
        }

        #[test]
        fn next_int_in_bounds(seed in any::<u64>(), min in 0usize..1000, width in 0usize..500) {
            check_next_int_in_bounds(seed, min, width)?;
        }

        #[test]
        fn shuffle_is_permutation(seed in any::<u64>(), len in 0usize..300) {
            check_shuffle_is_permutation(seed, len)?;
        }
    }
}
