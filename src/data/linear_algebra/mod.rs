//! # Linear algebra
//!
//! Dense matrix and vector operations. Everything here is sized for the basis matrices of the
//! simplex method: small, square and dense, inverted in full each iteration.
pub mod matrix;
pub mod vector;
