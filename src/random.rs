//! Seeded random number generation.
//!
//! Every run owns its generator. Nothing in the crate draws from a global
//! or thread-local RNG except [`fresh_seed`], which only picks a seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator type used by the search loop and the breeding operators.
pub type SearchRng = StdRng;

/// Creates a reproducible generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> SearchRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a seed for runs configured without one.
pub fn fresh_seed() -> u64 {
    rand::random()
}
