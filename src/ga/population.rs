//! Fixed-size collections of individuals.

use super::blueprint::Blueprint;
use super::individual::Individual;
use rand::RngCore;
use std::fmt;

/// The individuals alive in one generation.
///
/// Tracks the index of the fittest member. The cache is refreshed by every
/// operation that changes a genome through the population; ties resolve to
/// the lowest index.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
    fittest: Option<usize>,
}

impl Population {
    /// Creates `size` freshly seeded individuals.
    pub fn new(size: usize, blueprint: &Blueprint, rng: &mut dyn RngCore) -> Self {
        let individuals = (0..size).map(|_| Individual::new(blueprint, rng)).collect();
        Self::from_individuals(individuals)
    }

    /// Wraps existing individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        let mut population = Self {
            individuals,
            fittest: None,
        };
        population.update_fittest();
        population
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Whether the population has no members.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individual at index `i`.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn individual(&self, i: usize) -> &Individual {
        &self.individuals[i]
    }

    /// Mutates the individual at `i` through `f`, then refreshes the fittest.
    ///
    /// # Panics
    /// Panics if `i >= len()`.
    pub fn update_individual<T>(&mut self, i: usize, f: impl FnOnce(&mut Individual) -> T) -> T {
        let out = f(&mut self.individuals[i]);
        self.update_fittest();
        out
    }

    /// Mutable access for the engine's phases, which refresh the cache
    /// themselves once a whole phase is done.
    pub(crate) fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// Members in index order.
    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    /// Iterates members in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// The member with the highest fitness, or `None` when empty.
    pub fn fittest(&self) -> Option<&Individual> {
        self.fittest.map(|i| &self.individuals[i])
    }

    /// Index of the cached fittest member.
    pub fn fittest_index(&self) -> Option<usize> {
        self.fittest
    }

    /// Rescans the population for its fittest member.
    ///
    /// Starts from index 0 and only moves on a strictly greater fitness.
    pub fn update_fittest(&mut self) {
        self.fittest = if self.individuals.is_empty() {
            None
        } else {
            let mut best = 0;
            for (i, ind) in self.individuals.iter().enumerate().skip(1) {
                if ind.fitness() > self.individuals[best].fitness() {
                    best = i;
                }
            }
            Some(best)
        };
    }

    /// Sum of all fitness values.
    pub fn total_fitness(&self) -> i64 {
        self.individuals.iter().map(Individual::fitness).sum()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fittest() {
            Some(best) => writeln!(f, " = {}", best.fitness())?,
            None => writeln!(f, " = -")?,
        }
        for (i, ind) in self.individuals.iter().enumerate() {
            writeln!(f, "  {i}:{ind}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::gene::{genes_from, Gene};
    use crate::random::create_rng;

    fn bits_population(genomes: &[&[i32]]) -> Population {
        let blueprint = Blueprint::n_bits(genomes[0].len()).unwrap();
        Population::from_individuals(
            genomes
                .iter()
                .map(|g| Individual::from_genes(&blueprint, genes_from(g)))
                .collect(),
        )
    }

    #[test]
    fn test_new_population() {
        let blueprint = Blueprint::n_bits(8).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::new(10, &blueprint, &mut rng);
        assert_eq!(pop.len(), 10);
        let best = pop.fittest().unwrap();
        assert!(pop.iter().all(|ind| ind.fitness() <= best.fitness()));
    }

    #[test]
    fn test_empty_population() {
        let blueprint = Blueprint::n_bits(8).unwrap();
        let mut rng = create_rng(42);
        let pop = Population::new(0, &blueprint, &mut rng);
        assert!(pop.is_empty());
        assert!(pop.fittest().is_none());
        assert_eq!(pop.total_fitness(), 0);
    }

    #[test]
    fn test_fittest_tie_prefers_first() {
        let pop = bits_population(&[&[1, 0], &[1, 1], &[0, 0], &[1, 1]]);
        assert_eq!(pop.fittest_index(), Some(1));

        let flat = bits_population(&[&[0, 0], &[0, 0], &[0, 0]]);
        assert_eq!(flat.fittest_index(), Some(0));
    }

    #[test]
    fn test_update_individual_refreshes_fittest() {
        let mut pop = bits_population(&[&[1, 0], &[0, 0], &[0, 0]]);
        assert_eq!(pop.fittest_index(), Some(0));

        pop.update_individual(2, |ind| ind.set_genes(&genes_from(&[1, 1])));
        assert_eq!(pop.fittest_index(), Some(2));
        assert_eq!(pop.fittest().unwrap().fitness(), 100);

        pop.update_individual(2, |ind| ind.set_gene(0, Gene::new(0)));
        assert_eq!(pop.fittest_index(), Some(0));
    }

    #[test]
    fn test_total_fitness() {
        let pop = bits_population(&[&[1, 0], &[1, 1], &[0, 0]]);
        assert_eq!(pop.total_fitness(), 150);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let pop = bits_population(&[&[1, 0]]);
        let _ = pop.individual(1);
    }

    #[test]
    fn test_display() {
        let pop = bits_population(&[&[1, 0], &[1, 1]]);
        assert_eq!(pop.to_string(), " = 100\n  0:[1,0]=50\n  1:[1,1]=100\n");
    }
}
