//! Cities and the immutable city set.
//!
//! A [`CitySet`] is built once, validated, and then only read. Routes refer
//! to cities by their index in the set, so two cities sharing coordinates
//! are still distinct.

use crate::error::TspError;
use rand::Rng;

/// Number of cities in the default random instance.
pub const DEFAULT_NUM_CITIES: usize = 20;

/// Side length of the square the default random instance is drawn from.
pub const DEFAULT_EXTENT: f64 = 500.0;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    pub x: f64,
    pub y: f64,
}

impl City {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An ordered, validated, non-empty collection of cities.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CitySet {
    cities: Vec<City>,
}

impl CitySet {
    /// Validates and wraps `cities`.
    ///
    /// # Errors
    /// [`TspError::EmptyCitySet`] when `cities` is empty, and
    /// [`TspError::NonFiniteCoordinate`] when any coordinate is NaN or infinite.
    pub fn new(cities: Vec<City>) -> Result<Self, TspError> {
        if cities.is_empty() {
            return Err(TspError::EmptyCitySet);
        }
        if let Some(index) = cities
            .iter()
            .position(|c| !c.x.is_finite() || !c.y.is_finite())
        {
            return Err(TspError::NonFiniteCoordinate { index });
        }
        Ok(Self { cities })
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&City> {
        self.cities.get(index)
    }

    pub fn as_slice(&self) -> &[City] {
        &self.cities
    }

    /// Length of the closed tour visiting `order` (city indices).
    ///
    /// Sums consecutive legs and the leg from the last city back to the first.
    /// A single city yields 0.0.
    ///
    /// # Panics
    /// Panics if `order` contains an index outside the set.
    pub fn route_length(&self, order: &[usize]) -> f64 {
        let Some((&first, _)) = order.split_first() else {
            return 0.0;
        };
        let last = order[order.len() - 1];
        let open: f64 = order
            .windows(2)
            .map(|w| self.cities[w[0]].distance(&self.cities[w[1]]))
            .sum();
        open + self.cities[last].distance(&self.cities[first])
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CitySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            cities: Vec<City>,
        }
        let raw = Raw::deserialize(deserializer)?;
        CitySet::new(raw.cities).map_err(serde::de::Error::custom)
    }
}

/// Draws `n` cities uniformly from `[0, extent)²`.
pub fn random_cities<R: Rng>(n: usize, extent: f64, rng: &mut R) -> Vec<City> {
    (0..n)
        .map(|_| City::new(rng.random_range(0.0..extent), rng.random_range(0.0..extent)))
        .collect()
}
