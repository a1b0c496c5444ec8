//! # Error reporting for problem construction
//!
//! Malformed input shapes are rejected while building a problem, before any iteration begins.
//! Mathematically well-defined terminal conditions (infeasibility, unboundedness, a singular
//! basis) are not errors; they are variants of the optimization result.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// A `BuildError` is created when a problem description is rejected during construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum BuildError {
    /// The dimensions of the cost vector, constraint matrix and right-hand side don't match.
    ///
    /// The contained `String` is a message for the end user.
    InvalidDimension(String),
}

impl Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::InvalidDimension(message) => write!(f, "invalid dimension: {}", message),
        }
    }
}

impl Error for BuildError {
}
