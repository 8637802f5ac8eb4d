//! Genetic Algorithm framework.
//!
//! A generational GA over fixed-length integer genomes. Problems are
//! described at runtime by a [`Blueprint`]: a genome length plus a
//! [`Seeder`] producing initial gene values and a [`FitnessStrategy`]
//! scoring a gene sequence.
//!
//! # Core Types
//!
//! - [`Gene`] → [`Chromosome`] → [`Individual`] → [`Population`]
//! - [`GaConfig`]: run parameters (population size, mutation probability,
//!   crossover method, generation cap)
//! - [`GeneticAlgorithm`]: owns the population and runs the loop
//! - [`GaResult`]: fittest individual, generation count, termination reason
//!
//! # Generation
//!
//! 1. Roulette-wheel selection builds a new population ([`selection`])
//! 2. Adjacent pairs exchange a gene prefix ([`operators::crossover`])
//! 3. Each individual may re-seed one gene ([`operators::mutation`])
//! 4. The new population replaces the old one
//!
//! There is no elitism, so the best fitness may drop between generations.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod blueprint;
mod chromosome;
mod config;
pub mod fitness;
pub mod gene;
mod individual;
pub mod operators;
mod population;
mod runner;
pub mod selection;

pub use blueprint::Blueprint;
pub use chromosome::Chromosome;
pub use config::{CrossoverMethod, GaConfig};
pub use fitness::{Accumulate, FitnessStrategy, NBits, NQueens};
pub use gene::{Constant, Gene, Identity, RandomBelow, Seeder};
pub use individual::Individual;
pub use population::Population;
pub use runner::{EngineState, GaResult, GenerationReport, GeneticAlgorithm, Termination};
