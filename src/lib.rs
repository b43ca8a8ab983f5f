//! Genetic-algorithm heuristic for the Traveling Salesman Problem.
//!
//! Given a fixed set of 2D cities, the engine evolves a population of
//! closed tours and returns the shortest one it finds:
//!
//! - **Cities**: [`city::City`] points collected into an immutable
//!   [`city::CitySet`]. A city's identity is its index in the set.
//! - **Genetic Algorithm**: [`ga`] holds the route representation, the
//!   permutation operators, elitist truncation selection and the
//!   generational loop.
//!
//! # Quick start
//!
//! ```
//! use tsp_ga::city::City;
//! use tsp_ga::ga::GaConfig;
//! use tsp_ga::random::create_rng;
//!
//! let cities = vec![
//!     City::new(0.0, 0.0),
//!     City::new(10.0, 0.0),
//!     City::new(10.0, 10.0),
//!     City::new(0.0, 10.0),
//! ];
//! let mut rng = create_rng(7);
//! let route = tsp_ga::optimize_with_rng(&cities, &GaConfig::default(), &mut rng).unwrap();
//! assert_eq!(route.len(), 4);
//! ```
//!
//! The engine is single-threaded and holds no global state: everything
//! lives inside one call.

pub mod city;
pub mod error;
pub mod ga;
pub mod random;

pub use error::TspError;

use city::{City, CitySet};
use ga::{GaConfig, GaRunner, Route, TspProblem};
use rand::Rng;

/// Runs the GA over `cities` with the given parameters and returns the
/// best route of the final generation.
///
/// Uses the default parent count and a randomly seeded generator. See
/// [`optimize_with_rng`] for reproducible runs.
///
/// # Errors
/// [`TspError::InvalidConfig`] if `mutation_rate` lies outside `[0, 1]` or
/// `population_size` is smaller than the default parent count. Rates are
/// not clamped here.
pub fn optimize(
    cities: &[City],
    population_size: usize,
    mutation_rate: f64,
    generations: usize,
) -> Result<Route, TspError> {
    let config = GaConfig {
        population_size,
        mutation_rate,
        generations,
        ..GaConfig::default()
    };
    let mut rng = random::create_rng(rand::random());
    optimize_with_rng(cities, &config, &mut rng)
}

/// Runs the GA with an injected random source.
///
/// The same generator state, cities and configuration always yield the
/// same route.
pub fn optimize_with_rng<R: Rng>(
    cities: &[City],
    config: &GaConfig,
    rng: &mut R,
) -> Result<Route, TspError> {
    let problem = TspProblem::new(CitySet::new(cities.to_vec())?);
    let result = GaRunner::run_with_rng(&problem, config, rng, None)?;
    Ok(result.best)
}
