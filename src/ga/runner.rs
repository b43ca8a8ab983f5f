//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → truncation selection → crossover → mutation → repeat,
//! for a fixed number of generations.

use super::config::GaConfig;
use super::selection::select_parents;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::TspError;
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument, trace, warn};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual of the final population.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Best individual seen in any generation, the initial one included.
    ///
    /// Without elitism a later generation can lose an earlier champion, so
    /// this may beat `best`.
    pub best_ever: I,

    /// Number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Best fitness of the initial population followed by the best fitness
    /// of each generation's population.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use tsp_ga::city::{random_cities, CitySet};
/// use tsp_ga::ga::{GaConfig, GaRunner, TspProblem};
/// use tsp_ga::random::create_rng;
///
/// let cities = random_cities(12, 100.0, &mut create_rng(1));
/// let problem = TspProblem::new(CitySet::new(cities).unwrap());
/// let config = GaConfig::default().with_generations(20).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.len(), 12);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, seeding the generator from `config.seed`.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, TspError> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before the next generation and returns the current population's best.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, TspError> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(problem, config, &mut rng, cancel)
    }

    /// Runs the GA drawing all randomness from `rng`. `config.seed` is ignored.
    ///
    /// # Errors
    /// [`TspError::InvalidConfig`] when the configuration fails validation,
    /// before any work is done. [`TspError::InvalidRoute`] if the returned
    /// route breaks the problem's invariants.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population = config.population_size,
            parents = config.parent_count,
            generations = config.generations
        )
    )]
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>, TspError> {
        config.validate()?;

        // 1. Initialize and evaluate
        let mut population = initial_population(problem, config.population_size, rng);

        let mut best_ever = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(best_ever.fitness().to_f64());

        let mut executed = 0usize;
        let mut cancelled = false;

        // 2. Generational loop
        for gen in 0..config.generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    warn!(generation = gen, "cancelled");
                    cancelled = true;
                    break;
                }
            }

            let parents = select_parents(&population, config.parent_count)?;

            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let p1 = &parents[rng.random_range(0..parents.len())];
                let p2 = &parents[rng.random_range(0..parents.len())];

                let mut child = problem.crossover(p1, p2, rng);
                if rng.random_range(0.0..1.0) < config.mutation_rate {
                    problem.mutate(&mut child, rng);
                }
                debug_assert!(problem.check(&child).is_ok());

                let f = problem.evaluate(&child);
                child.set_fitness(f);
                next_gen.push(child);
            }

            population = next_gen;
            executed = gen + 1;

            let gen_best = find_best(&population);
            if gen_best.fitness() < best_ever.fitness() {
                best_ever = gen_best.clone();
            }

            let gen_best_fitness = gen_best.fitness();
            fitness_history.push(gen_best_fitness.to_f64());
            trace!(generation = executed, best = gen_best_fitness.to_f64());

            problem.on_generation(executed, gen_best_fitness);
        }

        // 3. Terminal: best of the final population
        let best = find_best(&population).clone();
        problem.check(&best)?;

        debug!(
            generations = executed,
            best = best.fitness().to_f64(),
            best_ever = best_ever.fitness().to_f64(),
            "finished"
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            best_ever,
            generations: executed,
            cancelled,
            fitness_history,
        })
    }
}

/// Creates and evaluates `size` random individuals.
pub fn initial_population<P: GaProblem, R: Rng>(
    problem: &P,
    size: usize,
    rng: &mut R,
) -> Vec<P::Individual> {
    (0..size)
        .map(|_| {
            let mut ind = problem.create_individual(rng);
            let f = problem.evaluate(&ind);
            ind.set_fitness(f);
            ind
        })
        .collect()
}

/// Find the individual with the best (lowest) fitness.
fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}

// ============================================================================
// Tests
// ============================================================================
