//! # The revised simplex algorithm
//!
//! This module contains the iteration driver. Each round, the basis matrix is extracted from the
//! problem and inverted; the basic solution, dual prices and reduced costs are derived from that
//! inverse. A pivot rule selects the entering variable, a minimum-ratio test selects the leaving
//! variable, and the basis is exchanged in place until a terminal status is reached.
use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use itertools::izip;
use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::OptimizationResult;
use crate::algorithm::revised_simplex::basis::Basis;
use crate::algorithm::revised_simplex::strategy::pivot_rule::PivotRule;
use crate::data::linear_algebra::vector::dot;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;

pub mod basis;
pub mod strategy;

/// Parameters steering a single solve.
///
/// The defaults reproduce the base algorithm: a machine-precision relative singularity threshold
/// and no iteration budget.
#[derive(Copy, Clone, Debug)]
pub struct SolveOptions<F> {
    /// Relative threshold below which a pivot element is treated as zero during inversion of the
    /// basis matrix.
    ///
    /// The threshold is multiplied by the largest absolute entry of the matrix being inverted, so
    /// its meaning does not depend on the scale of the problem data.
    pub singularity_tolerance: F,
    /// Maximum number of iterations before the solve is abandoned with
    /// [`OptimizationResult::IterationLimit`].
    ///
    /// The algorithm itself carries no anti-cycling rule, so degenerate problems can in principle
    /// loop forever; this budget is the safety valve. `None` iterates without bound.
    pub iteration_limit: Option<usize>,
}

impl<F: Float> Default for SolveOptions<F> {
    fn default() -> Self {
        Self {
            singularity_tolerance: F::epsilon(),
            iteration_limit: None,
        }
    }
}

/// Reduces the cost of the all-slack basic solution to the minimum.
///
/// The initial basis consists of the trailing `m` columns of the problem. Those are expected to
/// form an identity (as produced by [`StandardForm::with_slacks`]) with a nonnegative right-hand
/// side; if they do not, the first iteration terminates with `SingularBasis` or `Infeasible`
/// instead of producing undefined results.
///
/// # Arguments
///
/// * `problem`: Validated problem in standard form.
/// * `options`: Numerical tolerance and iteration budget.
///
/// # Return value
///
/// An [`OptimizationResult`] with the terminal status and the iteration at which it was reached.
/// The iteration counter is incremented at the start of each round, so statuses detected on the
/// first pass report iteration `1`.
pub fn primal<F, PR>(problem: &StandardForm<F>, options: &SolveOptions<F>) -> OptimizationResult<F>
where
    F: Float + fmt::Debug,
    PR: PivotRule<F>,
{
    let mut basis = Basis::slacks(problem.nr_variables(), problem.nr_constraints());
    let mut rule = PR::new();
    let mut iterations = 0;

    loop {
        if let Some(limit) = options.iteration_limit {
            if iterations == limit {
                debug!("iteration budget of {} exhausted", limit);
                break OptimizationResult::IterationLimit { iterations };
            }
        }
        iterations += 1;

        let basis_matrix = problem.constraints().select_columns(basis.basic());
        let inverse = match basis_matrix.inverted(options.singularity_tolerance) {
            Some(inverse) => inverse,
            None => {
                debug!("basis matrix not invertible at iteration {}", iterations);
                break OptimizationResult::SingularBasis { iterations };
            },
        };

        // Re-checked every round: a correct ratio test keeps this nonnegative after the first
        // iteration, but the first basic solution is whatever the right-hand side dictates.
        let basic_solution = inverse.multiply(problem.rhs());
        if basic_solution.iter().any(|&value| value < F::zero()) {
            debug!("basic solution has a negative component at iteration {}", iterations);
            break OptimizationResult::Infeasible { iterations };
        }

        let basic_costs = basis.basic().iter().map(|&j| problem.cost(j)).collect::<Vec<_>>();
        let prices = inverse.left_multiply(&basic_costs);

        let entering = rule.select_entering(basis.nonbasic(), |j| {
            problem.cost(j) - dot(&prices, &problem.constraints().column(j))
        });
        let (entering_position, entering_index) = match entering {
            Some(selected) => selected,
            None => {
                // All reduced costs are nonnegative: the current basic solution is optimal.
                let mut values = vec![F::zero(); problem.nr_variables()];
                for (&index, &value) in izip!(basis.basic(), &basic_solution) {
                    values[index] = value;
                }
                let objective_value = dot(problem.costs(), &values);
                debug!("optimum {:?} reached after {} iterations", objective_value, iterations);
                break OptimizationResult::FiniteOptimum(
                    Solution::new(values, objective_value, iterations),
                );
            },
        };

        let direction = inverse.multiply(&problem.constraints().column(entering_index));
        match select_pivot_row(&basic_solution, &direction) {
            Some(leaving_position) => {
                trace!(
                    "iteration {}: variable {} enters, variable {} leaves",
                    iterations,
                    entering_index,
                    basis.basic()[leaving_position],
                );
                basis.exchange(entering_position, leaving_position);
            },
            None => {
                debug!("unbounded direction found at iteration {}", iterations);
                break OptimizationResult::Unbounded { iterations };
            },
        }
    }
}

/// Minimum-ratio test.
///
/// Only rows with a positive direction component restrict the step size; the others get an
/// infinite ratio. Among equal minimal ratios the first row wins, which makes degenerate pivots
/// deterministic but offers no anti-cycling guarantee.
///
/// # Return value
///
/// The row of the leaving variable, or `None` when no direction component is positive and the
/// problem is unbounded along the entering variable.
fn select_pivot_row<F: Float>(basic_solution: &[F], direction: &[F]) -> Option<usize> {
    debug_assert_eq!(basic_solution.len(), direction.len());

    if direction.iter().all(|&step| step <= F::zero()) {
        return None;
    }

    izip!(basic_solution, direction)
        .map(|(&value, &step)| if step > F::zero() { value / step } else { F::infinity() })
        .position_min_by(|left, right| left.partial_cmp(right).unwrap_or(Ordering::Equal))
}
