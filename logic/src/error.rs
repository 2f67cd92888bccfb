use thiserror::Error;

/// Returned when reading a position at or beyond a vector's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for width {width}")]
pub struct OutOfBounds {
    pub index: usize,
    pub width: usize,
}

/// Returned when a `Both` value has no counterpart in Kleene logic.
///
/// `index` is the first contradicted position (always `0` for a scalar).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("position {index} is contradicted and cannot be represented in Kleene logic")]
pub struct Contradiction {
    pub index: usize,
}
