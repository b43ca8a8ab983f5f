//! Genetic Algorithm for the Traveling Salesman Problem.
//!
//! The generational loop is written against two traits so the mechanics
//! stay separate from the tour representation:
//!
//! - [`Individual`]: a candidate solution with a cached fitness
//! - [`GaProblem`]: initialization, evaluation, crossover and mutation
//!
//! # Key Types
//!
//! - [`Route`]: a closed tour, the TSP individual
//! - [`TspProblem`]: the TSP over a [`CitySet`](crate::city::CitySet)
//! - [`GaConfig`]: population size, parent count, mutation rate, generations
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: final route with run statistics
//!
//! # Submodules
//!
//! - [`operators`]: Fisher–Yates initialization, ordered crossover, swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod problem;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use problem::TspProblem;
pub use runner::{initial_population, GaResult, GaRunner};
pub use selection::select_parents;
pub use types::{Fitness, GaProblem, Individual, Route};
