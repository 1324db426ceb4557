//! Deterministic random number generation for combat.
//!
//! Every random decision in a battle flows through its [`DuelRng`]:
//! deck shuffles, strategy draws, and the uniform pick among equally
//! ranked spells. Seeding the battle therefore fixes the whole duel,
//! which is what the statistical AI tests rely on.
//!
//! ```
//! use wizard_duel::core::DuelRng;
//!
//! let mut rng = DuelRng::new(42);
//! let mut replay = DuelRng::new(42);
//! assert_eq!(rng.gen_range_usize(0..10), replay.gen_range_usize(0..10));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable ChaCha8 RNG owned by a single battle.
#[derive(Clone, Debug)]
pub struct DuelRng {
    inner: ChaCha8Rng,
}

impl DuelRng {
    /// Create an RNG from a battle seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform index draw, used to pick among ranked candidates.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (deck reshuffles).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Pick an index in proportion to its weight.
    ///
    /// Weights need not be normalized; zero-weight entries are never
    /// picked. Returns `None` when there is nothing to draw from
    /// (empty slice or no positive weight).
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let roll = self.inner.gen::<f32>() * total;
        let mut cumulative = 0.0;
        let mut drawn = None;

        for (index, &weight) in weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }
            cumulative += weight;
            drawn = Some(index);
            if roll < cumulative {
                break;
            }
        }

        // A roll of exactly `total` slips past every bucket and
        // lands on the last positive weight.
        drawn
    }
}
