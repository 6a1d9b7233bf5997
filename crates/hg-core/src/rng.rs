//! Dice for hero generation
//!
//! Uses a seeded ChaCha RNG so a generation run can be replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Hero generation random number source
///
/// Wraps ChaCha8Rng and remembers its seed so a run can be reported and
/// replayed.
#[derive(Debug, Clone)]
pub struct HeroRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl HeroRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll one die: returns 1..=sides
    ///
    /// Returns 0 if sides is 0.
    pub fn roll_die(&mut self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        self.rng.gen_range(1..=sides)
    }

    /// Roll `count` dice with `sides` sides and add them up
    pub fn roll_sum(&mut self, count: u32, sides: u32) -> u32 {
        (0..count).map(|_| self.roll_die(sides)).sum()
    }

    /// Roll four dice and drop one of the lowest
    ///
    /// Only a single instance of the lowest face is discarded, so four 1s
    /// give 3.
    pub fn roll_best_of_four(&mut self, sides: u32) -> u32 {
        let rolls: [u32; 4] = std::array::from_fn(|_| self.roll_die(sides));
        let lowest = rolls.iter().copied().min().unwrap_or(0);
        rolls.iter().sum::<u32>() - lowest
    }

    /// Percentile roll, 1..=100
    pub fn percentile(&mut self) -> u32 {
        self.roll_die(100)
    }

    /// Choose a random element from a non-empty array
    pub fn choose<T: Copy, const N: usize>(&mut self, items: &[T; N]) -> T {
        const { assert!(N > 0, "cannot choose from an empty array") };
        items[self.rng.gen_range(0..N)]
    }
}

impl Default for HeroRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
