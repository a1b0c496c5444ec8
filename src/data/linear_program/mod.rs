//! # Linear programs
//!
//! Representation of problems in standard form and of the solutions derived from them.
pub mod error;
pub mod solution;
pub mod standard_form;
