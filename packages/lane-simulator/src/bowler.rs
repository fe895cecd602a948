//! Seeded source of legal pin counts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct RandomBowler {
    rng: StdRng,
}

impl RandomBowler {
    /// Seeded bowlers repeat the same game; unseeded ones draw from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }

    /// Knock down between zero and `max_pins` pins.
    pub fn roll(&mut self, max_pins: u8) -> u8 {
        self.rng.random_range(0..=max_pins)
    }
}
