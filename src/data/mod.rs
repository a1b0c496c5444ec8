//! # Data structures
//!
//! Linear algebra primitives and representations of linear programs.
pub mod linear_algebra;
pub mod linear_program;
