//! Fair six-sided dice.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of single die rolls.
///
/// The session rolls through this seam so tests can substitute scripted
/// values for the entropy-backed [`Dice`].
pub trait Roll {
    /// Produces one roll in `[1, 6]`, independent of all prior rolls.
    fn roll(&mut self) -> u8;
}

/// A fair six-sided die retaining its most recent value.
#[derive(Debug)]
pub struct Dice {
    rng: StdRng,
    last_value: u8,
}

impl Dice {
    /// Creates a die seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            last_value: 0,
        }
    }

    /// The most recently rolled value; 0 before the first roll.
    pub fn last_value(&self) -> u8 {
        self.last_value
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl Roll for Dice {
    fn roll(&mut self) -> u8 {
        self.last_value = self.rng.gen_range(1..=6);
        self.last_value
    }
}
