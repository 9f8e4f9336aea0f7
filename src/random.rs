//! The uniform random source every generation choice is drawn from.
//!
//! Any `rand::Rng` works, seed a `StdRng` for repeatable mazes. `ReplaySource` hands back
//! a fixed list of samples, which pins down every choice a generation pass makes.

use rand::Rng;
use std::cmp;

pub trait RandomSource {
    /// A uniform sample in [0, 1).
    fn next_unit(&mut self) -> f64;

    /// A uniform index in [0, bound), `floor(sample * bound)`.
    fn below(&mut self, bound: usize) -> usize {
        let scaled = (self.next_unit() * bound as f64) as usize;
        cmp::min(scaled, bound.saturating_sub(1))
    }
}

impl<R: Rng> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays `samples` in order, starting over from the first once exhausted.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    samples: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Samples outside [0, 1) are clamped into it. An empty list replays 0.0 forever.
    pub fn new(samples: Vec<f64>) -> ReplaySource {
        let samples = samples.into_iter()
            .map(|sample| {
                if sample < 0.0 {
                    0.0
                } else if sample >= 1.0 {
                    1.0 - f64::EPSILON
                } else {
                    sample
                }
            })
            .collect();
        ReplaySource { samples, position: 0 }
    }

    /// How many samples have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.position % self.samples.len()];
        self.position += 1;
        sample
    }
}

/// Fisher-Yates: from the last index down to 1, swap with a uniform pick at or below it.
pub fn shuffle<T, R: RandomSource>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {

    use itertools::Itertools;
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn rng_samples_are_units() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let u = rng.next_unit();
            assert!(u >= 0.0 && u < 1.0);
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut replay = ReplaySource::new(vec![0.0, 0.5, 0.99, 1.5]);
        assert_eq!(replay.below(4), 0);
        assert_eq!(replay.below(4), 2);
        assert_eq!(replay.below(4), 3);
        assert_eq!(replay.below(4), 3);
        assert_eq!(replay.below(0), 0);
    }

    #[test]
    fn replay_cycles() {
        let mut replay = ReplaySource::new(vec![0.1, 0.2]);
        let drawn = (0..5).map(|_| replay.next_unit()).collect::<Vec<f64>>();
        assert_eq!(drawn, vec![0.1, 0.2, 0.1, 0.2, 0.1]);
        assert_eq!(replay.drawn(), 5);
    }

    #[test]
    fn shuffle_near_one_is_identity() {
        let mut items = (0..25).collect::<Vec<usize>>();
        let mut replay = ReplaySource::new(vec![0.99]);
        shuffle(&mut items, &mut replay);
        assert_eq!(items, (0..25).collect::<Vec<usize>>());
    }

    #[test]
    fn shuffle_zero_rotates() {
        // Every swap is with index 0, which walks the first item to the back.
        let mut items = vec![0, 1, 2, 3];
        let mut replay = ReplaySource::new(vec![0.0]);
        shuffle(&mut items, &mut replay);
        assert_eq!(items, vec![1, 2, 3, 0]);
    }

    #[test]
    fn quickcheck_shuffle_is_permutation() {
        fn prop(items: Vec<u16>, seed: u64) -> bool {
            let mut shuffled = items.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            shuffle(&mut shuffled, &mut rng);
            shuffled.into_iter().sorted().collect::<Vec<_>>() ==
            items.into_iter().sorted().collect::<Vec<_>>()
        }
        quickcheck(prop as fn(Vec<u16>, u64) -> bool)
    }
}
