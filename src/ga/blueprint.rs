//! Genome layout shared by every chromosome of a run.

use super::fitness::{FitnessStrategy, NBits, NQueens};
use super::gene::{RandomBelow, Seeder};
use crate::error::{GaError, Result};
use std::fmt;
use std::sync::Arc;

/// Genome length plus the seeding and fitness strategies bound to it.
///
/// Cloning is cheap: both strategies are shared behind [`Arc`].
///
/// # Examples
///
/// ```
/// use u_genetic::ga::{Blueprint, Constant, NBits};
///
/// let blueprint = Blueprint::new(8, Constant(1), NBits).unwrap();
/// assert_eq!(blueprint.len(), 8);
/// ```
#[derive(Clone)]
pub struct Blueprint {
    length: usize,
    seeder: Arc<dyn Seeder>,
    fitness: Arc<dyn FitnessStrategy>,
}

impl Blueprint {
    /// Creates a blueprint for genomes of `length` genes.
    ///
    /// Fails if `length` is zero.
    pub fn new<S, F>(length: usize, seeder: S, fitness: F) -> Result<Self>
    where
        S: Seeder + 'static,
        F: FitnessStrategy + 'static,
    {
        Self::from_shared(length, Arc::new(seeder), Arc::new(fitness))
    }

    /// Creates a blueprint from already shared strategies.
    pub fn from_shared(
        length: usize,
        seeder: Arc<dyn Seeder>,
        fitness: Arc<dyn FitnessStrategy>,
    ) -> Result<Self> {
        if length == 0 {
            return Err(GaError::InvalidGenomeLength);
        }
        Ok(Self {
            length,
            seeder,
            fitness,
        })
    }

    /// Random bit strings scored by [`NBits`].
    pub fn n_bits(length: usize) -> Result<Self> {
        Self::new(length, RandomBelow::new(2)?, NBits)
    }

    /// Random queen rows in `[0, n)` scored by [`NQueens`].
    pub fn n_queens(n: usize) -> Result<Self> {
        let rows = i32::try_from(n).map_err(|_| GaError::InvalidGenomeLength)?;
        Self::new(n, RandomBelow::new(rows)?, NQueens)
    }

    /// Number of genes per chromosome.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Always `false`: a blueprint has at least one gene.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The seeding strategy.
    pub fn seeder(&self) -> &dyn Seeder {
        self.seeder.as_ref()
    }

    /// The fitness strategy.
    pub fn fitness(&self) -> &dyn FitnessStrategy {
        self.fitness.as_ref()
    }
}

impl fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}
