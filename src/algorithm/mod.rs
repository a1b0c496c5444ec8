//! # Algorithms
use std::fmt;

use num_traits::Float;

use crate::algorithm::revised_simplex::{primal, SolveOptions};
use crate::algorithm::revised_simplex::strategy::pivot_rule::Dantzig;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;

pub mod revised_simplex;

/// A problem formulation that can be solved to a terminal status.
///
/// Implementors describe a complete, validated problem; solving never fails in the exceptional
/// sense, every mathematically well-defined terminal condition is represented as a variant of
/// the returned `OptimizationResult`.
pub trait Solve<F> {
    /// Solve this problem with the default pivot rule.
    ///
    /// # Return value
    ///
    /// The terminal status reached, together with the solution if a finite optimum was found.
    fn solve(&self, options: &SolveOptions<F>) -> OptimizationResult<F>;
}

impl<F> Solve<F> for StandardForm<F>
where
    F: Float + fmt::Debug,
{
    fn solve(&self, options: &SolveOptions<F>) -> OptimizationResult<F> {
        primal::<_, Dantzig>(self, options)
    }
}

/// Terminal state of a solve attempt.
///
/// A linear program is either infeasible, unbounded or has a finite optimum; in floating point,
/// a basis matrix can moreover turn out singular, and an externally supplied iteration budget
/// can run out. All variants carry the iteration at which they were detected.
#[derive(Clone, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    /// An optimal basic solution was reached.
    FiniteOptimum(Solution<F>),
    /// A computed basic solution had a negative component.
    Infeasible {
        /// Iteration at which the negative component was detected.
        iterations: usize,
    },
    /// The objective can be decreased without bound along the chosen entering variable.
    Unbounded {
        /// Iteration at which the unbounded direction was found.
        iterations: usize,
    },
    /// The basis matrix could not be inverted.
    SingularBasis {
        /// Iteration at which inversion failed.
        iterations: usize,
    },
    /// The iteration budget ran out before a terminal status was reached.
    IterationLimit {
        /// The budget that was exhausted.
        iterations: usize,
    },
}

impl<F> OptimizationResult<F> {
    /// The number of iterations after which this status was produced.
    pub fn iterations(&self) -> usize {
        match self {
            OptimizationResult::FiniteOptimum(solution) => solution.iterations(),
            OptimizationResult::Infeasible { iterations }
            | OptimizationResult::Unbounded { iterations }
            | OptimizationResult::SingularBasis { iterations }
            | OptimizationResult::IterationLimit { iterations } => *iterations,
        }
    }
}

impl<F: fmt::Debug> fmt::Display for OptimizationResult<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptimizationResult::FiniteOptimum(solution) => write!(
                f,
                "optimal solution with objective value {:?} found after {} iterations",
                solution.objective_value(),
                solution.iterations(),
            ),
            OptimizationResult::Infeasible { iterations } => {
                write!(f, "problem is infeasible, detected at iteration {}", iterations)
            },
            OptimizationResult::Unbounded { iterations } => {
                write!(f, "problem is unbounded, detected at iteration {}", iterations)
            },
            OptimizationResult::SingularBasis { iterations } => {
                write!(f, "basis matrix was singular at iteration {}", iterations)
            },
            OptimizationResult::IterationLimit { iterations } => {
                write!(f, "iteration limit of {} reached without terminal status", iterations)
            },
        }
    }
}
