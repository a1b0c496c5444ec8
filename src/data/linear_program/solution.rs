//! # Representation of optimal solutions
//!
//! Once a linear program is solved to optimality, the basic solution values are scattered back
//! into a full solution vector with zeros at all nonbasic positions.
use num_traits::Float;

use crate::data::linear_algebra::vector::dot;

/// An optimal solution to a linear program in standard form.
#[derive(Clone, PartialEq, Debug)]
pub struct Solution<F> {
    /// One value per variable, including slacks; nonbasic positions are zero.
    values: Vec<F>,
    /// Value of the objective function for this solution.
    objective_value: F,
    /// Number of iterations the solve took.
    iterations: usize,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(values: Vec<F>, objective_value: F, iterations: usize) -> Self {
        Self { values, objective_value, iterations }
    }

    /// The full solution vector, one value per variable.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// The objective value `c^T x` at this solution.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Number of iterations after which this solution was found.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<F: Float> Solution<F> {
    /// Whether the stored objective value is consistent with the stored solution vector.
    ///
    /// # Arguments
    ///
    /// * `costs`: Cost coefficients of the problem this solution belongs to.
    /// * `tolerance`: Maximum absolute deviation allowed.
    pub fn objective_matches(&self, costs: &[F], tolerance: F) -> bool {
        debug_assert_eq!(costs.len(), self.values.len());

        (dot(costs, &self.values) - self.objective_value).abs() <= tolerance
    }
}
