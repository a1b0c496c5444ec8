//! # Strategies
//!
//! Interchangeable decision rules used while iterating.
pub mod pivot_rule;
