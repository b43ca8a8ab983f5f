//! Parent selection.
//!
//! The breeding stock is chosen by elitist truncation: rank the whole
//! population by fitness and keep the best `parent_count`. Every
//! generation therefore breeds only from its global top slice.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Individual;
use crate::error::TspError;

/// Returns clones of the `parent_count` fittest individuals, best first.
///
/// Ranks by cached fitness, ascending. Ties keep population order. The
/// input population is left untouched.
///
/// # Errors
/// [`TspError::InvalidConfig`] if `parent_count` is zero or exceeds the
/// population size.
pub fn select_parents<I: Individual>(
    population: &[I],
    parent_count: usize,
) -> Result<Vec<I>, TspError> {
    if parent_count == 0 {
        return Err(TspError::InvalidConfig("parent_count must be at least 1".into()));
    }
    if parent_count > population.len() {
        return Err(TspError::InvalidConfig(format!(
            "parent_count {parent_count} exceeds population size {}",
            population.len()
        )));
    }

    let mut ranked: Vec<usize> = (0..population.len()).collect();
    ranked.sort_by(|&a, &b| {
        population[a]
            .fitness()
            .partial_cmp(&population[b].fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(ranked[..parent_count]
        .iter()
        .map(|&i| population[i].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct TestInd {
        id: usize,
        fit: f64,
    }

    impl Individual for TestInd {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<TestInd> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(id, &fit)| TestInd { id, fit })
            .collect()
    }

    #[test]
    fn test_keeps_fittest_best_first() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0, 3.0]);
        let parents = select_parents(&pop, 3).unwrap();
        let ids: Vec<usize> = parents.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1]);
    }

    #[test]
    fn test_population_untouched() {
        let pop = make_population(&[10.0, 5.0, 1.0]);
        let before = pop.clone();
        let _ = select_parents(&pop, 2).unwrap();
        assert_eq!(pop, before);
    }

    #[test]
    fn test_all_parents() {
        let pop = make_population(&[2.0, 1.0]);
        let parents = select_parents(&pop, 2).unwrap();
        assert_eq!(parents.len(), 2);
        assert_eq!(parents[0].id, 1);
    }

    #[test]
    fn test_ties_keep_population_order() {
        let pop = make_population(&[5.0, 5.0, 5.0, 1.0]);
        let ids: Vec<usize> = select_parents(&pop, 3)
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 0, 1]);
    }

    #[test]
    fn test_too_many_parents_rejected() {
        let pop = make_population(&[1.0, 2.0]);
        assert!(matches!(
            select_parents(&pop, 3),
            Err(TspError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_parents_rejected() {
        let pop = make_population(&[1.0]);
        assert!(select_parents(&pop, 0).is_err());
    }
}
