//! Fixed-length gene sequences with cached fitness.

use super::blueprint::Blueprint;
use super::gene::Gene;
use crate::random::draw_index;
use rand::RngCore;
use std::fmt;

/// An ordered sequence of exactly `blueprint.len()` genes.
///
/// The cached fitness always equals the blueprint's fitness strategy applied
/// to the current genes: every mutator re-evaluates before returning.
#[derive(Clone)]
pub struct Chromosome {
    genes: Vec<Gene>,
    fitness: i64,
    blueprint: Blueprint,
}

impl Chromosome {
    /// Creates a chromosome whose genes are seeded by the blueprint.
    pub fn new(blueprint: &Blueprint, rng: &mut dyn RngCore) -> Self {
        let genes = (0..blueprint.len())
            .map(|_| Gene::seeded(blueprint.seeder(), None, rng))
            .collect();
        Self::from_genes(blueprint, genes)
    }

    /// Creates a chromosome from explicit genes.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the blueprint length.
    pub fn from_genes(blueprint: &Blueprint, genes: Vec<Gene>) -> Self {
        assert_eq!(
            genes.len(),
            blueprint.len(),
            "chromosome must have exactly {} genes",
            blueprint.len()
        );
        let fitness = blueprint.fitness().evaluate(&genes);
        Self {
            genes,
            fitness,
            blueprint: blueprint.clone(),
        }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`: blueprints have at least one gene.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// All genes in order.
    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    /// The gene at position `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn gene(&self, i: usize) -> Gene {
        self.genes[i]
    }

    /// Cached fitness of the current genes.
    pub fn fitness(&self) -> i64 {
        self.fitness
    }

    /// The blueprint this chromosome was built from.
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Replaces every gene.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the chromosome length.
    pub fn set_genes(&mut self, genes: &[Gene]) {
        assert_eq!(
            genes.len(),
            self.genes.len(),
            "chromosome must have exactly {} genes",
            self.genes.len()
        );
        self.genes.copy_from_slice(genes);
        self.refresh_fitness();
    }

    /// Replaces the gene at position `i`.
    ///
    /// # Panics
    /// Panics if `i` is out of range.
    pub fn set_gene(&mut self, i: usize, gene: Gene) {
        self.genes[i] = gene;
        self.refresh_fitness();
    }

    /// Replaces one uniformly chosen gene with a freshly seeded one.
    pub fn random_mutation(&mut self, rng: &mut dyn RngCore) {
        let i = draw_index(rng, self.genes.len());
        let gene = Gene::seeded(self.blueprint.seeder(), None, rng);
        self.set_gene(i, gene);
    }

    /// Deep-copies the genes of `src`.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn copy_genes_from(&mut self, src: &Chromosome) {
        self.set_genes(&src.genes);
    }

    /// Swaps genes `[0, point)` with `other`.
    ///
    /// Both chromosomes are re-evaluated. `point` is clamped to the length.
    ///
    /// # Panics
    /// Panics if the lengths differ.
    pub fn swap_prefix(&mut self, other: &mut Chromosome, point: usize) {
        assert_eq!(
            self.genes.len(),
            other.genes.len(),
            "crossover requires equal-length chromosomes"
        );
        let point = point.min(self.genes.len());
        self.genes[..point].swap_with_slice(&mut other.genes[..point]);
        self.refresh_fitness();
        other.refresh_fitness();
    }

    fn refresh_fitness(&mut self) {
        self.fitness = self.blueprint.fitness().evaluate(&self.genes);
    }
}

impl PartialEq for Chromosome {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes && self.fitness == other.fitness
    }
}

impl fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("genes", &self.genes)
            .field("fitness", &self.fitness)
            .finish()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, gene) in self.genes.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{gene}")?;
        }
        write!(f, "]={}", self.fitness)
    }
}
