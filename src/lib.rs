//! Generational genetic algorithm engine.
//!
//! Evolves fixed-length integer genomes with roulette-wheel selection,
//! one-point crossover and single-gene mutation until the fittest member
//! reaches a target fitness or a generation cap is exceeded.
//!
//! - [`ga`]: genes, chromosomes, populations, strategies and the engine
//! - [`error`]: configuration errors
//! - [`random`]: seeded random sources
//!
//! Seeding and fitness are runtime strategy objects, so the same engine
//! solves bit-string problems ([`ga::NBits`]), N-queens ([`ga::NQueens`]) or
//! anything a closure can score.
//!
//! # Logging
//!
//! Progress goes through the [`log`] facade: run start and end at `info`,
//! one line per generation at `debug`, full populations at `trace`. The
//! crate never installs a logger.

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
