//! Random source helpers.
//!
//! Every random draw of a run (seeding, selection, crossover point,
//! mutation roll and target) comes from one [`StdRng`] owned by the engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws an integer uniformly from `[0, bound)`.
///
/// A non-positive bound yields `0` instead of panicking. Roulette-wheel
/// selection relies on this when the whole population has zero fitness.
pub fn draw_below<R: Rng + ?Sized>(rng: &mut R, bound: i64) -> i64 {
    if bound <= 0 {
        0
    } else {
        rng.random_range(0..bound)
    }
}

/// Draws an index uniformly from `[0, len)`.
///
/// # Panics
/// Panics if `len` is zero.
pub fn draw_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    assert!(len > 0, "cannot draw an index from an empty range");
    rng.random_range(0..len)
}
