//! Roulette-wheel selection.
//!
//! Each output slot is filled by spinning a wheel whose sectors are
//! proportional to fitness. The wheel is spun by drawing `r` in `[0, S)`
//! (`S` = total fitness) and walking the population from index 0,
//! subtracting each fitness until `r <= 0`.
//!
//! The walk stops at the first individual that brings `r` to zero or
//! below, so draws landing exactly on a sector boundary and the all-zero
//! case (`S == 0`, draw `0`) both favour low indices. Runs seeded the same
//! way depend on this bias to reproduce.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::individual::Individual;
use super::population::Population;
use crate::random::draw_below;
use rand::Rng;

/// Picks one index by a single spin of the wheel.
///
/// # Panics
/// Panics if `population` is empty.
pub fn spin<R: Rng + ?Sized>(population: &[Individual], total: i64, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let mut remainder = draw_below(rng, total);
    for (i, ind) in population.iter().enumerate() {
        remainder -= ind.fitness();
        if remainder <= 0 {
            return i;
        }
    }
    // Only reachable with negative fitness values.
    population.len() - 1
}

/// Builds a new population of the same size by roulette-wheel sampling
/// with replacement. Selected genomes are deep-copied.
///
/// An empty population yields an empty population.
pub fn roulette_wheel<R: Rng + ?Sized>(population: &Population, rng: &mut R) -> Population {
    let members = population.as_slice();
    let total = population.total_fitness();

    let selected = (0..members.len())
        .map(|_| members[spin(members, total, rng)].clone())
        .collect();

    Population::from_individuals(selected)
}
