use super::Op;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over `num` random operations on keys drawn from `0..key_space`.
/// A fraction `remove_ratio` of them are removals, the rest insertions, so keys
/// get inserted, overwritten and removed (possibly while absent) over time.
/// The same seed always gives the same sequence
pub struct RandomWorkload {
    remaining: usize,
    key_space: u64,
    remove_ratio: f64,
    rng: Pcg64,
}

impl RandomWorkload {
    pub fn new(num: usize, key_space: u64, seed: u64) -> RandomWorkload {
        assert!(key_space > 0, "key space must not be empty");
        RandomWorkload {
            remaining: num,
            key_space,
            remove_ratio: 0.3,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    pub fn with_remove_ratio(mut self, remove_ratio: f64) -> RandomWorkload {
        assert!(
            remove_ratio >= 0. && remove_ratio <= 1.,
            "Invalid remove ratio {}: out of range",
            remove_ratio
        );
        self.remove_ratio = remove_ratio;
        self
    }
}

impl Iterator for RandomWorkload {
    type Item = Op;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let key = self.rng.gen_range(0, self.key_space);
        if self.rng.gen::<f64>() < self.remove_ratio {
            Some(Op::Remove { key })
        } else {
            let tag: u32 = self.rng.gen();
            Some(Op::Insert {
                key,
                value: format!("{}:{:08x}", key, tag),
            })
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomWorkload {}

impl ExactSizeIterator for RandomWorkload {}
