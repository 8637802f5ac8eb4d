//! Candidate solutions.

use super::blueprint::Blueprint;
use super::chromosome::Chromosome;
use super::gene::Gene;
use rand::RngCore;
use std::fmt;

/// One candidate solution, owning exactly one [`Chromosome`].
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    chromosome: Chromosome,
}

impl Individual {
    /// Creates an individual with a freshly seeded genome.
    pub fn new(blueprint: &Blueprint, rng: &mut dyn RngCore) -> Self {
        Self {
            chromosome: Chromosome::new(blueprint, rng),
        }
    }

    /// Creates an individual from explicit genes.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the blueprint length.
    pub fn from_genes(blueprint: &Blueprint, genes: Vec<Gene>) -> Self {
        Self {
            chromosome: Chromosome::from_genes(blueprint, genes),
        }
    }

    /// The wrapped chromosome.
    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }

    /// Mutable access to the wrapped chromosome.
    pub fn chromosome_mut(&mut self) -> &mut Chromosome {
        &mut self.chromosome
    }

    /// Gene sequence of the chromosome.
    pub fn genes(&self) -> &[Gene] {
        self.chromosome.genes()
    }

    /// Gene at index `i`; panics if out of range.
    pub fn gene(&self, i: usize) -> Gene {
        self.chromosome.gene(i)
    }

    /// Replaces all genes and re-evaluates fitness.
    pub fn set_genes(&mut self, genes: &[Gene]) {
        self.chromosome.set_genes(genes);
    }

    /// Replaces gene `i` and re-evaluates fitness.
    pub fn set_gene(&mut self, i: usize, gene: Gene) {
        self.chromosome.set_gene(i, gene);
    }

    /// Deep-copies the genes of `other`.
    pub fn copy_genes_from(&mut self, other: &Individual) {
        self.chromosome.copy_genes_from(&other.chromosome);
    }

    /// Re-seeds one randomly chosen gene.
    pub fn random_mutation(&mut self, rng: &mut dyn RngCore) {
        self.chromosome.random_mutation(rng);
    }

    /// Cached fitness of the chromosome.
    pub fn fitness(&self) -> i64 {
        self.chromosome.fitness()
    }

    /// Gene values as plain integers.
    pub fn values(&self) -> Vec<i32> {
        self.genes().iter().map(Gene::value).collect()
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.chromosome, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::gene::genes_from;

    #[test]
    fn test_forwards_to_chromosome() {
        let blueprint = Blueprint::n_queens(4).unwrap();
        let mut ind = Individual::from_genes(&blueprint, genes_from(&[0, 0, 0, 0]));
        assert_eq!(ind.fitness(), 0);

        ind.set_genes(&genes_from(&[1, 3, 0, 2]));
        assert_eq!(ind.fitness(), 100);
        assert_eq!(ind.values(), vec![1, 3, 0, 2]);
        assert_eq!(ind.gene(1).value(), 3);
        assert_eq!(ind.fitness(), ind.chromosome().fitness());

        ind.set_gene(3, Gene::new(3));
        assert!(ind.fitness() < 100);
    }

    #[test]
    fn test_copy_is_independent() {
        let blueprint = Blueprint::n_bits(3).unwrap();
        let a = Individual::from_genes(&blueprint, genes_from(&[1, 1, 1]));
        let mut b = Individual::from_genes(&blueprint, genes_from(&[0, 0, 0]));
        b.copy_genes_from(&a);
        b.chromosome_mut().set_gene(0, Gene::new(0));
        assert_eq!(a.values(), vec![1, 1, 1]);
        assert_eq!(b.values(), vec![0, 1, 1]);
        assert_eq!(b.fitness(), 66);
    }

    #[test]
    fn test_display() {
        let blueprint = Blueprint::n_bits(2).unwrap();
        let ind = Individual::from_genes(&blueprint, genes_from(&[1, 1]));
        assert_eq!(ind.to_string(), "[1,1]=100");
    }
}
