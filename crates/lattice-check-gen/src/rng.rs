//! RNG seeding with ChaCha8.
//!
//! A seeded generator is reproducible: same seed -> same pools and
//! proposals, always. Without a seed the RNG is drawn from OS entropy.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create the RNG for one generator invocation.
pub fn generator_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
