//! Crossover and mutation over a whole population.
//!
//! Both operators edit the population in place and refresh its fittest
//! cache once they are done.
//!
//! # Crossover
//!
//! Adjacent pairs `(0, 1), (2, 3), ...` exchange their genes before a single
//! crossover point chosen once per call (see [`crossover_point`]). With an
//! odd population the last individual is left alone.
//!
//! # Mutation
//!
//! Each individual independently rolls a percentage in `[0, 100)`; a roll
//! below the mutation probability re-seeds one random gene.

use super::config::CrossoverMethod;
use super::population::Population;
use rand::Rng;

/// Chooses the crossover point for genomes of `length` genes.
///
/// # Panics
/// Panics if `method` is [`CrossoverMethod::Random`] and `length` is zero.
pub fn crossover_point<R: Rng>(method: CrossoverMethod, length: usize, rng: &mut R) -> usize {
    match method {
        CrossoverMethod::Middle => length / 2,
        CrossoverMethod::Random => rng.random_range(0..length),
    }
}

/// Swaps genes `[0, point)` between the members of each adjacent pair.
pub fn crossover_at(population: &mut Population, point: usize) {
    for pair in population.individuals_mut().chunks_exact_mut(2) {
        let (left, right) = pair.split_at_mut(1);
        left[0]
            .chromosome_mut()
            .swap_prefix(right[0].chromosome_mut(), point);
    }
    population.update_fittest();
}

/// Applies one-point crossover to every adjacent pair.
///
/// Returns the crossover point that was used, or `None` for an empty
/// population.
pub fn crossover<R: Rng>(
    population: &mut Population,
    method: CrossoverMethod,
    rng: &mut R,
) -> Option<usize> {
    let length = population.iter().next()?.chromosome().len();
    let point = crossover_point(method, length, rng);
    crossover_at(population, point);
    Some(point)
}

/// Mutates each individual with probability `probability` percent.
///
/// Returns how many individuals were mutated.
pub fn mutation<R: Rng>(population: &mut Population, probability: u32, rng: &mut R) -> usize {
    let mut mutated = 0;
    for ind in population.individuals_mut() {
        let roll: u32 = rng.random_range(0..100);
        if roll < probability {
            ind.random_mutation(rng);
            mutated += 1;
        }
    }
    population.update_fittest();
    mutated
}
