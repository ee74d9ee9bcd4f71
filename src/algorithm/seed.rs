//! Seed derivation and the per-instance pseudo-random part picker

use crate::math::hash::fnv1a64;
use rand::Rng;
use rand_pcg::Pcg64;

/// Generator initialisation derived from an identifier
///
/// Both halves come from a single digest so that one identifier fully
/// determines the random stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Initial generator state
    pub state: u64,
    /// Stream selector, always odd
    pub stream: u64,
}

impl Seed {
    /// Derive a seed from arbitrary identifier bytes
    pub fn from_identifier(identifier: &[u8]) -> Self {
        let digest = fnv1a64(identifier);
        Self {
            state: digest,
            // PCG increments must be odd
            stream: (digest >> 1) | 1,
        }
    }
}

/// Seeded random selector for reproducible catalog choices
///
/// Every draw advances the stream, so the order of calls is part of the output.
#[derive(Clone, Debug)]
pub struct PartPicker {
    rng: Pcg64,
}

impl PartPicker {
    /// Create a deterministic picker from a seed
    pub fn new(seed: Seed) -> Self {
        Self {
            rng: Pcg64::new(u128::from(seed.state), u128::from(seed.stream)),
        }
    }

    /// Create a picker directly from identifier bytes
    pub fn from_identifier(identifier: &[u8]) -> Self {
        Self::new(Seed::from_identifier(identifier))
    }

    /// Uniform index in `[0, len)`
    ///
    /// Returns `None` without consuming a draw when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniformly chosen element of `items`
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).and_then(|index| items.get(index))
    }
}
