//! Error type shared by all fallible operations.

/// Errors raised while validating inputs or checking route invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TspError {
    #[error("city set must contain at least one city")]
    EmptyCitySet,
    #[error("city {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("invalid GA configuration: {0}")]
    InvalidConfig(String),
    #[error("route is not a permutation of {expected} cities: {reason}")]
    InvalidRoute { expected: usize, reason: String },
}
