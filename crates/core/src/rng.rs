use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded source behind every shuffle in a run.
///
/// ChaCha8 has a fixed, documented output stream, so a seed replays the same
/// deck on any platform. The shuffle below is a plain Fisher–Yates walking
/// from the back of the slice.
#[derive(Debug, Clone)]
pub struct RngState {
    seed: u32,
    rng: ChaCha8Rng,
}

impl RngState {
    pub fn from_seed(seed: u32) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(u64::from(seed)),
        }
    }

    /// Draws a fresh seed from the thread-local entropy source.
    pub fn fresh_seed() -> u32 {
        rand::thread_rng().gen_range(1..=u32::MAX)
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.gen_range(0..=i);
            items.swap(i, j);
        }
    }
}
