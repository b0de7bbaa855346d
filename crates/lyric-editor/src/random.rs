//! Random source capability for note placement and color.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform random numbers in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }

    /// Uniform value in `[lo, lo + span]`; a negative span collapses to `lo`.
    fn in_span(&mut self, lo: f64, span: f64) -> f64 {
        lo + self.next_unit() * span.max(0.0)
    }
}

/// OS-seeded generator.
pub struct EntropyRandom(StdRng);

impl EntropyRandom {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

/// Replays a fixed sequence, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Values are clamped into `[0, 1)`. An empty script always yields 0.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values
                .into_iter()
                .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
            cursor: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_cycles() {
        let mut r = ScriptedRandom::new([0.1, 0.9]);
        assert_eq!(r.next_unit(), 0.1);
        assert_eq!(r.next_unit(), 0.9);
        assert_eq!(r.next_unit(), 0.1);
    }

    #[test]
    fn pick_index_stays_in_range() {
        let mut r = ScriptedRandom::new([0.0, 0.5, 1.0]);
        assert_eq!(r.pick_index(5), 0);
        assert_eq!(r.pick_index(5), 2);
        assert_eq!(r.pick_index(5), 4);
    }

    #[test]
    fn negative_span_collapses() {
        let mut r = ScriptedRandom::new([0.7]);
        assert_eq!(r.in_span(20.0, -50.0), 20.0);
    }

    #[test]
    fn entropy_values_are_unit_interval() {
        let mut r = EntropyRandom::seeded(7);
        for _ in 0..100 {
            let v = r.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
