//! Core trait definitions and the route representation.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the
//! generational loop and the problem being solved. [`Route`] is the TSP
//! individual: a permutation of city indices.

use crate::city::{City, CitySet};
use crate::error::TspError;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Lower fitness is considered better (minimization).
pub trait Fitness: PartialOrd + Copy + std::fmt::Debug + 'static {
    /// Returns a value representing the worst possible fitness.
    ///
    /// Used for individuals that have not been evaluated yet.
    fn worst() -> Self;

    /// Converts the fitness to `f64` for logging and history.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness. The runner calls
/// [`GaProblem::evaluate`] once per individual per generation and stores the
/// value via [`set_fitness`](Individual::set_fitness), so selection never
/// recomputes it.
pub trait Individual: Clone {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the cached fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Sets the fitness of this individual.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines a GA optimization problem.
///
/// The runner owns the loop (initialization, truncation selection, offspring
/// generation); the problem supplies:
///
/// 1. **Initialization**: how to create a random individual
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb an individual
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random, unevaluated individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual and returns its fitness. Lower is better.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one child by recombining two parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        rng: &mut R,
    ) -> Self::Individual;

    /// Mutates an individual in place.
    ///
    /// Called only when the runner's mutation roll succeeds. The default
    /// implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Checks the structural invariants of an individual.
    ///
    /// The runner calls this on the route it is about to return, so a
    /// malformed result surfaces as an error instead of a silent bad answer.
    fn check(&self, _individual: &Self::Individual) -> Result<(), TspError> {
        Ok(())
    }

    /// Called at the end of each generation with that generation's best fitness.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}

/// A closed tour: each city index of a [`CitySet`] exactly once.
///
/// The last city connects back to the first. Fitness (tour length) is
/// cached for the generation the route lives in.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Route {
    order: Vec<usize>,
    length: f64,
}

impl Route {
    /// Wraps an order without checking it. Length starts at the worst value.
    pub(crate) fn unevaluated(order: Vec<usize>) -> Self {
        Self {
            order,
            length: f64::worst(),
        }
    }

    /// Builds an evaluated route over `cities` from a visiting order.
    ///
    /// # Errors
    /// [`TspError::InvalidRoute`] if `order` is not a permutation of
    /// `0..cities.len()`.
    pub fn from_order(order: Vec<usize>, cities: &CitySet) -> Result<Self, TspError> {
        check_permutation(&order, cities.len())?;
        let length = cities.route_length(&order);
        Ok(Self { order, length })
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Closed tour length as of the last evaluation.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Cities in visiting order.
    pub fn cities<'a>(&'a self, set: &'a CitySet) -> impl Iterator<Item = &'a City> + 'a {
        self.order.iter().filter_map(|&i| set.get(i))
    }

    /// Legs of the closed tour: each city paired with the next, the last
    /// paired with the first.
    pub fn legs<'a>(&'a self, set: &'a CitySet) -> impl Iterator<Item = (&'a City, &'a City)> + 'a {
        let n = self.order.len();
        (0..n).filter_map(move |i| {
            let from = set.get(self.order[i])?;
            let to = set.get(self.order[(i + 1) % n])?;
            Some((from, to))
        })
    }
}

impl Individual for Route {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.length
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.length = fitness;
    }
}

/// Checks that `order` contains every index in `0..n` exactly once.
pub(crate) fn check_permutation(order: &[usize], n: usize) -> Result<(), TspError> {
    let invalid = |reason: String| TspError::InvalidRoute { expected: n, reason };

    if order.len() != n {
        return Err(invalid(format!("length {}", order.len())));
    }
    let mut seen = vec![false; n];
    for &city in order {
        match seen.get_mut(city) {
            None => return Err(invalid(format!("unknown city {city}"))),
            Some(true) => return Err(invalid(format!("city {city} visited twice"))),
            Some(slot) => *slot = true,
        }
    }
    Ok(())
}
