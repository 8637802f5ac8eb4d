//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! [`CrossoverMethod`] selects how the crossover point is chosen.

use crate::error::{GaError, Result};
use std::fmt;
use std::str::FromStr;

/// How the crossover point is chosen each generation.
///
/// # Examples
///
/// ```
/// use u_genetic::ga::CrossoverMethod;
///
/// let method: CrossoverMethod = "random".parse().unwrap();
/// assert_eq!(method, CrossoverMethod::Random);
/// assert!("uniform".parse::<CrossoverMethod>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CrossoverMethod {
    /// Point at `length / 2` (integer division).
    #[default]
    Middle,

    /// Point drawn uniformly from `[0, length)`.
    Random,
}

impl FromStr for CrossoverMethod {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "middle" => Ok(CrossoverMethod::Middle),
            "random" => Ok(CrossoverMethod::Random),
            _ => Err(GaError::UnknownCrossoverMethod(s.to_string())),
        }
    }
}

impl fmt::Display for CrossoverMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrossoverMethod::Middle => write!(f, "middle"),
            CrossoverMethod::Random => write!(f, "random"),
        }
    }
}

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_genetic::ga::{CrossoverMethod, GaConfig};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.mutation_probability, 70);
/// assert_eq!(config.crossover, CrossoverMethod::Middle);
/// assert_eq!(config.max_generations, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_genetic::ga::{CrossoverMethod, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_mutation_probability(30)
///     .with_crossover(CrossoverMethod::Random)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Chance, in percent, that an individual receives one random mutation.
    pub mutation_probability: u32,

    /// Crossover point policy.
    pub crossover: CrossoverMethod,

    /// Generation cap. The run stops once the counter exceeds it.
    pub max_generations: usize,

    /// Fitness at which the run counts as converged.
    pub target_fitness: i64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_probability: 70,
            crossover: CrossoverMethod::Middle,
            max_generations: 10_000,
            target_fitness: 100,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the mutation probability (percent).
    ///
    /// Not clamped: out-of-range values are reported by [`validate`](Self::validate).
    pub fn with_mutation_probability(mut self, percent: u32) -> Self {
        self.mutation_probability = percent;
        self
    }

    /// Sets the crossover method.
    pub fn with_crossover(mut self, method: CrossoverMethod) -> Self {
        self.crossover = method;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the convergence fitness.
    pub fn with_target_fitness(mut self, fitness: i64) -> Self {
        self.target_fitness = fitness;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::InvalidPopulationSize);
        }
        if self.mutation_probability > 100 {
            return Err(GaError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.mutation_probability, 70);
        assert_eq!(config.crossover, CrossoverMethod::Middle);
        assert_eq!(config.max_generations, 10_000);
        assert_eq!(config.target_fitness, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_mutation_probability(10)
            .with_crossover(CrossoverMethod::Random)
            .with_max_generations(500)
            .with_target_fitness(80)
            .with_seed(42);

        assert_eq!(config.population_size, 50);
        assert_eq!(config.mutation_probability, 10);
        assert_eq!(config.crossover, CrossoverMethod::Random);
        assert_eq!(config.max_generations, 500);
        assert_eq!(config.target_fitness, 80);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
        assert!(GaConfig::default()
            .with_mutation_probability(0)
            .validate()
            .is_ok());
        assert!(GaConfig::default()
            .with_mutation_probability(100)
            .validate()
            .is_ok());
        assert!(GaConfig::default()
            .with_population_size(1)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_population() {
        let config = GaConfig::default().with_population_size(0);
        assert_eq!(config.validate(), Err(GaError::InvalidPopulationSize));
    }

    #[test]
    fn test_validate_mutation_out_of_range() {
        let config = GaConfig::default().with_mutation_probability(101);
        assert_eq!(
            config.validate(),
            Err(GaError::InvalidMutationProbability(101))
        );
    }

    #[test]
    fn test_crossover_parse() {
        assert_eq!("middle".parse(), Ok(CrossoverMethod::Middle));
        assert_eq!("Random".parse(), Ok(CrossoverMethod::Random));
        assert_eq!(" MIDDLE ".parse(), Ok(CrossoverMethod::Middle));
        assert_eq!(
            "two-point".parse::<CrossoverMethod>(),
            Err(GaError::UnknownCrossoverMethod("two-point".into()))
        );
    }

    #[test]
    fn test_crossover_display_roundtrip() {
        for method in [CrossoverMethod::Middle, CrossoverMethod::Random] {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_partial_config() {
        let config: GaConfig =
            serde_json::from_str(r#"{"population_size": 50, "crossover": "random"}"#).unwrap();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.crossover, CrossoverMethod::Random);
        assert_eq!(config.mutation_probability, 70);

        let bad = serde_json::from_str::<GaConfig>(r#"{"crossover": "uniform"}"#);
        assert!(bad.is_err());
    }
}
