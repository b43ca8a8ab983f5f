//! Permutation operators for route chromosomes.
//!
//! These operate on `&[usize]` city-index vectors. Each index is a distinct
//! token, so cities that share coordinates are never confused.
//!
//! - [`random_permutation`]: unbiased Fisher–Yates shuffle of `0..n`
//! - [`order_crossover`]: ordered crossover, one child per call
//! - [`swap_mutation`]: exchange two random positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Knuth, *TAOCP* Vol. 2, Algorithm P (shuffling)

use rand::seq::SliceRandom;
use rand::Rng;

/// Uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Ordered crossover producing a single child.
///
/// # Algorithm
///
/// 1. Draw `start` in `[0, n)` and `end` in `[start, n)`
/// 2. The child begins as `parent1[start..end]`, in order
/// 3. Walk `parent2` front to back, appending every city the child lacks
///
/// When `start == end` the segment is empty and the child is a copy of
/// `parent2`. That outcome is kept as is.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or hold an index `>= n`.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n == 0 {
        return Vec::new();
    }

    let start = rng.random_range(0..n);
    let end = rng.random_range(start..n);

    build_child(parent1, parent2, start, end)
}

/// Copy `template[start..end]`, then fill from `donor` in its order.
fn build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = Vec::with_capacity(n);
    let mut present = vec![false; n];

    for &city in &template[start..end] {
        child.push(city);
        present[city] = true;
    }

    for &city in donor {
        if !present[city] {
            child.push(city);
            present[city] = true;
        }
    }

    child
}

/// Swap mutation: exchange the cities at two independent random positions.
///
/// The positions may coincide, in which case nothing changes.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}
