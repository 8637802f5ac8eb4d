//! Error types for configuration and construction failures.
//!
//! Only invalid configuration is reported through [`GaError`]. Once an
//! engine is built, a generation cannot fail; contract violations such as
//! out-of-range indices panic instead.

use thiserror::Error;

/// Errors raised while validating run parameters or genome layouts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GaError {
    /// Population size was zero.
    #[error("population_size must be at least 1")]
    InvalidPopulationSize,

    /// Mutation probability outside the `0..=100` percentage range.
    #[error("mutation_probability must be within 0..=100, got {0}")]
    InvalidMutationProbability(u32),

    /// Crossover policy name did not match any known method.
    #[error("unknown crossover method: {0:?}")]
    UnknownCrossoverMethod(String),

    /// Genome length was zero.
    #[error("genome length must be at least 1")]
    InvalidGenomeLength,

    /// Random seeding bound was not positive.
    #[error("random seeding bound must be positive, got {0}")]
    InvalidSeedBound(i32),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
