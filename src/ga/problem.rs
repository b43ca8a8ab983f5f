//! The TSP as a [`GaProblem`].

use super::operators::{order_crossover, random_permutation, swap_mutation};
use super::types::{check_permutation, GaProblem, Route};
use crate::city::CitySet;
use crate::error::TspError;
use rand::Rng;

/// Closed-tour minimization over a fixed city set.
#[derive(Debug, Clone)]
pub struct TspProblem {
    cities: CitySet,
}

impl TspProblem {
    pub fn new(cities: CitySet) -> Self {
        Self { cities }
    }

    pub fn cities(&self) -> &CitySet {
        &self.cities
    }
}

impl GaProblem for TspProblem {
    type Individual = Route;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Route {
        Route::unevaluated(random_permutation(self.cities.len(), rng))
    }

    fn evaluate(&self, route: &Route) -> f64 {
        self.cities.route_length(route.order())
    }

    fn crossover<R: Rng>(&self, parent1: &Route, parent2: &Route, rng: &mut R) -> Route {
        Route::unevaluated(order_crossover(parent1.order(), parent2.order(), rng))
    }

    fn mutate<R: Rng>(&self, route: &mut Route, rng: &mut R) {
        swap_mutation(route.order_mut(), rng);
    }

    fn check(&self, route: &Route) -> Result<(), TspError> {
        check_permutation(route.order(), self.cities.len())
    }
}
