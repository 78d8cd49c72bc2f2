//! Injectable randomness for every sampler in the domain.
//!
//! The domain never owns a generator. Callers hand a `RandomSource` down the
//! generation call chain, so a seeded source replays a galaxy exactly.

/// A source of uniform randomness.
///
/// Implementors provide [`next_unit`](RandomSource::next_unit); everything else
/// is derived from it.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, faces)`. Returns 0 when `faces` is 0.
    fn roll(&mut self, faces: u32) -> u32 {
        if faces == 0 {
            return 0;
        }
        let value = (self.next_unit() * f64::from(faces)).floor() as u32;
        value.min(faces - 1)
    }

    /// Uniform float in `[0, faces)`.
    fn roll_float(&mut self, faces: f64) -> f64 {
        self.next_unit() * faces
    }

    /// Uniform float in `[min, max)`. Returns `min` for an empty range.
    fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        if max <= min {
            return min;
        }
        min + self.next_unit() * (max - min)
    }

    /// Uniform integer in `[min, max]`. Returns `min` when `max < min`.
    fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if max < min {
            return min;
        }
        min + self.roll(max - min + 1)
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform pick from a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        items.get(self.roll(items.len() as u32) as usize)
    }

    /// Pick from `(item, weight)` pairs by cumulative weight.
    ///
    /// Weights need not sum to 1. The last item absorbs floating-point slack.
    fn pick_weighted<'a, T>(&mut self, items: &'a [(T, f64)]) -> Option<&'a T>
    where
        Self: Sized,
    {
        let total: f64 = items.iter().map(|(_, w)| w.max(0.0)).sum();
        if total <= 0.0 {
            return None;
        }
        let target = self.next_unit() * total;
        let mut cumulative = 0.0;
        for (item, weight) in items {
            cumulative += weight.max(0.0);
            if target < cumulative {
                return Some(item);
            }
        }
        items.last().map(|(item, _)| item)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::RandomSource;

    /// Seeded generator for domain tests.
    pub struct TestRng(ChaCha8Rng);

    impl TestRng {
        pub fn seeded(seed: u64) -> Self {
            Self(ChaCha8Rng::seed_from_u64(seed))
        }
    }

    impl RandomSource for TestRng {
        fn next_unit(&mut self) -> f64 {
            self.0.gen::<f64>()
        }
    }

    /// Replays a fixed sequence of unit values, cycling when exhausted.
    pub struct ScriptedRng {
        values: Vec<f64>,
        cursor: usize,
    }

    impl ScriptedRng {
        pub fn new(values: Vec<f64>) -> Self {
            Self { values, cursor: 0 }
        }
    }

    impl RandomSource for ScriptedRng {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.cursor % self.values.len()];
            self.cursor += 1;
            value
        }
    }
}
