//! GA evolutionary loop execution.
//!
//! [`GeneticAlgorithm`] owns the current population and drives it through
//! selection → crossover → mutation → replacement, one generation per
//! [`step`](GeneticAlgorithm::step), until the fittest member reaches the
//! target fitness or the generation cap is exceeded.

use super::blueprint::Blueprint;
use super::config::GaConfig;
use super::individual::Individual;
use super::operators;
use super::population::Population;
use super::selection;
use crate::error::Result;
use crate::random::create_rng;
use rand::rngs::StdRng;

const NO_POPULATION: &str = "engine has no population; call step() or run() first";

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// The fittest individual reached the target fitness.
    Converged,
    /// The generation counter exceeded the cap.
    Exhausted,
}

/// Lifecycle of a [`GeneticAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineState {
    /// No population owned yet.
    Idle,
    /// Owns a population and may take further steps.
    Running,
    /// Stopped on the target fitness.
    Converged,
    /// Stopped on the generation cap.
    Exhausted,
}

impl From<Termination> for EngineState {
    fn from(t: Termination) -> Self {
        match t {
            Termination::Converged => EngineState::Converged,
            Termination::Exhausted => EngineState::Exhausted,
        }
    }
}

/// Snapshot handed to run observers.
#[derive(Debug, Clone, Copy)]
pub struct GenerationReport<'a> {
    /// Completed generations (`0` for the initial population).
    pub generation: usize,
    /// Fittest individual of that generation.
    pub fittest: &'a Individual,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest individual of the final population.
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: i64,

    /// Generations executed.
    pub generations: usize,

    /// Terminal state reached.
    pub termination: Termination,

    /// Best fitness of the initial population followed by that of each
    /// generation. Not monotonic: there is no elitism.
    pub fitness_history: Vec<i64>,
}

/// Generational genetic algorithm engine.
///
/// # Usage
///
/// ```
/// use u_genetic::ga::{Blueprint, GaConfig, GeneticAlgorithm, Termination};
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_seed(42);
/// let mut ga = GeneticAlgorithm::new(Blueprint::n_bits(8).unwrap(), config).unwrap();
/// let result = ga.run();
/// assert_eq!(result.termination, Termination::Converged);
/// assert_eq!(result.best_fitness, 100);
/// ```
pub struct GeneticAlgorithm {
    blueprint: Blueprint,
    config: GaConfig,
    rng: StdRng,
    population: Option<Population>,
    generation: usize,
    state: EngineState,
    history: Vec<i64>,
}

impl GeneticAlgorithm {
    /// Creates an idle engine.
    ///
    /// Fails if the configuration is invalid; nothing is allocated then.
    pub fn new(blueprint: Blueprint, config: GaConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Ok(Self {
            blueprint,
            config,
            rng,
            population: None,
            generation: 0,
            state: EngineState::Idle,
            history: Vec::new(),
        })
    }

    /// Run parameters.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Problem description used to build individuals.
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Completed generations since the run started.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The owned population, if one was built.
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// Fittest member of the owned population.
    pub fn fittest(&self) -> Option<&Individual> {
        self.population.as_ref().and_then(Population::fittest)
    }

    /// Best fitness per generation so far.
    pub fn fitness_history(&self) -> &[i64] {
        &self.history
    }

    /// Drops the owned population and returns to [`EngineState::Idle`].
    ///
    /// A seeded engine also rewinds its random stream, so every run from
    /// `reset` replays the same evolution.
    pub fn reset(&mut self) {
        if let Some(seed) = self.config.seed {
            self.rng = create_rng(seed);
        }
        self.population = None;
        self.generation = 0;
        self.history.clear();
        self.state = EngineState::Idle;
    }

    /// Replaces the owned population; the previous one is dropped.
    ///
    /// The fittest cache of `next` is recomputed. An idle engine becomes
    /// [`EngineState::Running`].
    pub fn set_population(&mut self, mut next: Population) {
        next.update_fittest();
        self.population = Some(next);
        if self.state == EngineState::Idle {
            self.state = EngineState::Running;
        }
    }

    /// Roulette-wheel selection over the owned population.
    ///
    /// Builds the initial population first if the engine is idle.
    pub fn selection(&mut self) -> Population {
        self.ensure_population();
        let current = self.population.as_ref().expect(NO_POPULATION);
        selection::roulette_wheel(current, &mut self.rng)
    }

    /// Applies crossover to `next` with the configured method.
    ///
    /// Returns the crossover point used.
    pub fn crossover(&mut self, next: &mut Population) -> Option<usize> {
        operators::crossover(next, self.config.crossover, &mut self.rng)
    }

    /// Applies mutation to `next` with the configured probability.
    ///
    /// Returns how many individuals were mutated.
    pub fn mutation(&mut self, next: &mut Population) -> usize {
        operators::mutation(next, self.config.mutation_probability, &mut self.rng)
    }

    /// Checks whether the run must stop before the next generation.
    pub fn check_termination(&self) -> Option<Termination> {
        let best = self.fittest()?.fitness();
        if best == self.config.target_fitness {
            Some(Termination::Converged)
        } else if self.generation > self.config.max_generations {
            Some(Termination::Exhausted)
        } else {
            None
        }
    }

    /// Advances one generation.
    ///
    /// Returns `false`, without changing the population, when the run has
    /// converged or exhausted its generation budget. Builds the initial
    /// population first if the engine is idle.
    pub fn step(&mut self) -> bool {
        self.ensure_population();
        if self.history.is_empty() {
            let best = self.current_best().fitness();
            self.history.push(best);
        }

        if let Some(termination) = self.check_termination() {
            self.state = termination.into();
            return false;
        }
        self.state = EngineState::Running;

        let mut next = self.selection();
        let point = self.crossover(&mut next);
        let mutated = self.mutation(&mut next);
        self.set_population(next);
        self.generation += 1;

        let best = self.current_best();
        log::debug!(
            "generation {}: {} (crossover point {:?}, {} mutated)",
            self.generation,
            best,
            point,
            mutated
        );
        let fitness = best.fitness();
        self.history.push(fitness);
        if log::log_enabled!(log::Level::Trace) {
            log::trace!("population{}", self.current());
        }
        true
    }

    /// Starts a fresh run and steps until it terminates.
    pub fn run(&mut self) -> GaResult {
        self.run_with_observer(|_| {})
    }

    /// Like [`run`](Self::run), reporting the initial population and every
    /// completed generation to `observer`.
    ///
    /// ```
    /// use u_genetic::ga::{Blueprint, GaConfig, GeneticAlgorithm};
    /// use std::fmt::Write;
    ///
    /// let config = GaConfig::default().with_population_size(20).with_seed(1);
    /// let mut ga = GeneticAlgorithm::new(Blueprint::n_bits(6).unwrap(), config).unwrap();
    /// let mut trace = String::new();
    /// let result = ga.run_with_observer(|report| {
    ///     writeln!(trace, "{}: {}", report.generation, report.fittest).unwrap();
    /// });
    /// assert_eq!(trace.lines().count(), result.generations + 1);
    /// ```
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> GaResult
    where
        F: FnMut(&GenerationReport<'_>),
    {
        self.reset();
        let initial = Population::new(self.config.population_size, &self.blueprint, &mut self.rng);
        self.set_population(initial);
        log::info!(
            "starting run: population {}, genome length {}, mutation {}%, crossover {}",
            self.config.population_size,
            self.blueprint.len(),
            self.config.mutation_probability,
            self.config.crossover
        );

        observer(&self.report());
        while self.step() {
            observer(&self.report());
        }

        let result = self.result();
        log::info!(
            "run finished: {:?} after {} generations, best {}",
            result.termination,
            result.generations,
            result.best
        );
        result
    }

    fn result(&self) -> GaResult {
        let best = self.current_best().clone();
        let termination = match self.state {
            EngineState::Converged => Termination::Converged,
            _ => Termination::Exhausted,
        };
        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: self.generation,
            termination,
            fitness_history: self.history.clone(),
        }
    }

    fn report(&self) -> GenerationReport<'_> {
        GenerationReport {
            generation: self.generation,
            fittest: self.current_best(),
        }
    }

    fn ensure_population(&mut self) {
        if self.population.is_none() {
            let initial =
                Population::new(self.config.population_size, &self.blueprint, &mut self.rng);
            self.set_population(initial);
        }
    }

    fn current(&self) -> &Population {
        self.population.as_ref().expect(NO_POPULATION)
    }

    fn current_best(&self) -> &Individual {
        self.current()
            .fittest()
            .expect("population_size is validated to be at least 1")
    }
}

// ============================================================================
// Tests
// ============================================================================
