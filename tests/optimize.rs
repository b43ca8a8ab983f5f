//! End-to-end runs of the optimizer.

use tsp_ga::city::{random_cities, City, CitySet, DEFAULT_EXTENT, DEFAULT_NUM_CITIES};
use tsp_ga::ga::{GaConfig, GaRunner, Individual, TspProblem};
use tsp_ga::random::create_rng;
use tsp_ga::{optimize, optimize_with_rng, TspError};

const EPS: f64 = 1e-9;

fn square() -> Vec<City> {
    vec![
        City::new(0.0, 0.0),
        City::new(10.0, 0.0),
        City::new(10.0, 10.0),
        City::new(0.0, 10.0),
    ]
}

fn is_permutation(order: &[usize], n: usize) -> bool {
    let mut sorted = order.to_vec();
    sorted.sort_unstable();
    sorted == (0..n).collect::<Vec<_>>()
}

#[test]
fn test_square_converges_to_perimeter() {
    let config = GaConfig::default()
        .with_population_size(50)
        .with_generations(50);

    let mut optimal = 0;
    for seed in 0..20 {
        let route = optimize_with_rng(&square(), &config, &mut create_rng(seed)).unwrap();
        assert!(route.length() >= 40.0 - EPS, "seed {seed}: {}", route.length());
        if (route.length() - 40.0).abs() < EPS {
            optimal += 1;
        }
    }
    assert!(optimal >= 18, "only {optimal}/20 seeded runs found the perimeter");
}

#[test]
fn test_default_instance_returns_valid_tour() {
    let cities = random_cities(DEFAULT_NUM_CITIES, DEFAULT_EXTENT, &mut create_rng(2024));
    let route = optimize(&cities, 100, 0.1, 100).unwrap();
    assert_eq!(route.len(), DEFAULT_NUM_CITIES);
    assert!(is_permutation(route.order(), DEFAULT_NUM_CITIES));

    let set = CitySet::new(cities).unwrap();
    assert!((set.route_length(route.order()) - route.length()).abs() < EPS);
}

#[test]
fn test_same_seed_same_route() {
    let cities = random_cities(15, 100.0, &mut create_rng(5));
    let config = GaConfig::default().with_generations(40);
    let a = optimize_with_rng(&cities, &config, &mut create_rng(99)).unwrap();
    let b = optimize_with_rng(&cities, &config, &mut create_rng(99)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_beats_initial_population_sample() {
    let cities = random_cities(25, DEFAULT_EXTENT, &mut create_rng(8));
    let problem = TspProblem::new(CitySet::new(cities).unwrap());
    let result = GaRunner::run(&problem, &GaConfig::default().with_seed(3)).unwrap();

    // fitness_history[0] is the best of the initial population, so it bounds
    // every initial route from below
    assert!(result.best_ever.fitness() <= result.fitness_history[0]);
    assert!(result.best.fitness() < result.fitness_history[0]);
}

#[test]
fn test_empty_city_set_rejected() {
    assert_eq!(optimize(&[], 100, 0.1, 100), Err(TspError::EmptyCitySet));
}

#[test]
fn test_single_city_has_zero_length() {
    let route = optimize(&[City::new(7.0, 3.0)], 10, 0.1, 5).unwrap();
    assert_eq!(route.order(), &[0]);
    assert_eq!(route.length(), 0.0);
}

#[test]
fn test_two_cities_out_and_back() {
    let cities = [City::new(0.0, 0.0), City::new(6.0, 8.0)];
    let route = optimize(&cities, 10, 0.1, 5).unwrap();
    assert!(is_permutation(route.order(), 2));
    assert!((route.length() - 20.0).abs() < EPS);
}

#[test]
fn test_coincident_cities_stay_distinct() {
    let cities = vec![City::new(1.0, 1.0); 6];
    let route = optimize(&cities, 20, 0.5, 10).unwrap();
    assert!(is_permutation(route.order(), 6));
    assert_eq!(route.length(), 0.0);
}

#[test]
fn test_non_finite_city_rejected() {
    let cities = [City::new(0.0, 0.0), City::new(1.0, f64::NAN)];
    assert_eq!(
        optimize(&cities, 10, 0.1, 5),
        Err(TspError::NonFiniteCoordinate { index: 1 })
    );
}

#[test]
fn test_invalid_parameters_rejected() {
    // population smaller than the default parent count
    let err = optimize(&square(), 5, 0.1, 10).unwrap_err();
    assert!(matches!(err, TspError::InvalidConfig(_)));

    let err = optimize(&square(), 0, 0.1, 10).unwrap_err();
    assert!(matches!(err, TspError::InvalidConfig(_)));
}

#[test]
fn test_out_of_range_mutation_rate_rejected() {
    for rate in [5.0, -1.0, f64::NAN] {
        let err = optimize(&square(), 20, rate, 3).unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig(_)), "rate {rate}: {err:?}");
    }
    assert!(optimize(&square(), 20, 0.0, 3).is_ok());
    assert!(optimize(&square(), 20, 1.0, 3).is_ok());
}
