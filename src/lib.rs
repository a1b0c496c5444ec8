//! # A revised simplex solver
//!
//! Linear programs in standard form (minimize `c^T x` subject to `Ax = b` and `x >= 0`) are
//! solved with the Revised Simplex Method: rather than updating a full tableau, an inverse of
//! the current basis matrix is computed each round and used to derive the basic solution, the
//! dual prices and the reduced costs.
//!
//! Solving is a pure computation: it takes a
//! [`StandardForm`](data::linear_program::standard_form::StandardForm) and returns an
//! [`OptimizationResult`](algorithm::OptimizationResult), with no observable effect besides its
//! return value.
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;

#[cfg(test)]
mod tests;
