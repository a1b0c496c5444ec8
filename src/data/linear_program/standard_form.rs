//! # Linear programs in standard form
//!
//! A standard form problem minimizes `c^T x` subject to `Ax = b` with `x >= 0`. Problems arrive
//! here either already in that shape, or as a set of equality constraints that still need slack
//! columns appended to make the all-slack starting basis available.
use itertools::repeat_n;
use num_traits::Float;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::error::BuildError;

/// A validated linear program in standard form. Immutable once built.
///
/// Every variable is implicitly bounded below by zero and unbounded above; no other variable
/// bounds are representable, so none can be silently ignored.
#[derive(Clone, PartialEq, Debug)]
pub struct StandardForm<F> {
    costs: Vec<F>,
    constraints: DenseMatrix<F>,
    rhs: Vec<F>,
}

impl<F: Float> StandardForm<F> {
    /// Create a problem that is already in standard form.
    ///
    /// The trailing square block of `constraints` serves as the starting basis, so there must be
    /// at least as many variables as constraints.
    ///
    /// # Errors
    ///
    /// `BuildError::InvalidDimension` when `constraints` is empty or ragged, when the cost or
    /// right-hand side length doesn't match it, or when there are fewer variables than
    /// constraints.
    pub fn new(costs: Vec<F>, constraints: Vec<Vec<F>>, rhs: Vec<F>) -> Result<Self, BuildError> {
        let (nr_constraints, nr_variables) = validated_dimensions(&costs, &constraints, &rhs)?;
        if nr_variables < nr_constraints {
            return Err(BuildError::InvalidDimension(format!(
                "a standard form problem needs at least as many variables as constraints, \
                 got {} variables and {} constraints",
                nr_variables, nr_constraints,
            )));
        }

        Ok(Self {
            costs,
            constraints: DenseMatrix::from_data(constraints),
            rhs,
        })
    }

    /// Bring a set of equality constraints into standard form by appending slack variables.
    ///
    /// One slack column is appended per constraint: the constraint matrix becomes `[A | I]` and
    /// the cost vector is extended with zeros. The slacks form the starting basis, which is
    /// feasible whenever the right-hand side is nonnegative; a negative right-hand side is not
    /// rejected here but surfaces as `Infeasible` in the first iteration.
    ///
    /// # Errors
    ///
    /// `BuildError::InvalidDimension` as for [`StandardForm::new`], applied to the original,
    /// unaugmented shapes.
    pub fn with_slacks(
        costs: Vec<F>,
        constraints: Vec<Vec<F>>,
        rhs: Vec<F>,
    ) -> Result<Self, BuildError> {
        let (nr_constraints, _) = validated_dimensions(&costs, &constraints, &rhs)?;

        let mut costs = costs;
        costs.extend(repeat_n(F::zero(), nr_constraints));
        let constraints = DenseMatrix::from_data(constraints)
            .hcat(DenseMatrix::identity(nr_constraints));

        Ok(Self { costs, constraints, rhs })
    }

    /// The cost coefficients, one per variable.
    pub fn costs(&self) -> &[F] {
        &self.costs
    }

    /// The cost coefficient of variable `j`.
    pub fn cost(&self, j: usize) -> F {
        debug_assert!(j < self.costs.len());

        self.costs[j]
    }

    /// The equality constraint matrix.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// The right-hand side of the equality constraints.
    pub fn rhs(&self) -> &[F] {
        &self.rhs
    }

    /// Total number of variables, including any slacks.
    pub fn nr_variables(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// Number of equality constraints.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.nr_rows()
    }
}

/// Check that the provided shapes describe a rectangular, mutually consistent problem.
///
/// # Return value
///
/// The number of constraints and the number of variables.
fn validated_dimensions<F>(
    costs: &[F],
    constraints: &[Vec<F>],
    rhs: &[F],
) -> Result<(usize, usize), BuildError> {
    let nr_constraints = constraints.len();
    if nr_constraints == 0 {
        return Err(BuildError::InvalidDimension(
            "the constraint matrix has no rows".to_string(),
        ));
    }

    let nr_variables = constraints[0].len();
    if constraints.iter().any(|row| row.len() != nr_variables) {
        return Err(BuildError::InvalidDimension(
            "the constraint matrix rows have unequal lengths".to_string(),
        ));
    }

    if costs.len() != nr_variables {
        return Err(BuildError::InvalidDimension(format!(
            "the cost vector has {} entries but the constraint matrix has {} columns",
            costs.len(), nr_variables,
        )));
    }

    if rhs.len() != nr_constraints {
        return Err(BuildError::InvalidDimension(format!(
            "the right-hand side has {} entries but the constraint matrix has {} rows",
            rhs.len(), nr_constraints,
        )));
    }

    Ok((nr_constraints, nr_variables))
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::error::BuildError;
    use crate::data::linear_program::standard_form::StandardForm;

    #[test]
    fn slack_augmentation() {
        let problem = StandardForm::with_slacks(
            vec![-2f64, -3f64, -4f64],
            vec![
                vec![1f64, 2f64, -3f64],
                vec![-2f64, 0f64, 3f64],
                vec![1f64, 1f64, 0f64],
            ],
            vec![10f64, 15f64, 8f64],
        ).unwrap();

        assert_eq!(problem.nr_variables(), 6);
        assert_eq!(problem.nr_constraints(), 3);
        assert_eq!(problem.costs(), &[-2f64, -3f64, -4f64, 0f64, 0f64, 0f64]);
        assert_eq!(problem.constraints().row(0), &[1f64, 2f64, -3f64, 1f64, 0f64, 0f64]);
        assert_eq!(problem.constraints().row(2), &[1f64, 1f64, 0f64, 0f64, 0f64, 1f64]);
        assert_eq!(problem.rhs(), &[10f64, 15f64, 8f64]);
    }

    #[test]
    fn mismatched_shapes_are_rejected() {
        // Cost vector too short.
        let result = StandardForm::with_slacks(
            vec![1f64],
            vec![vec![1f64, 2f64]],
            vec![3f64],
        );
        assert!(matches!(result, Err(BuildError::InvalidDimension(_))));

        // Right-hand side too long.
        let result = StandardForm::with_slacks(
            vec![1f64, 2f64],
            vec![vec![1f64, 2f64]],
            vec![3f64, 4f64],
        );
        assert!(matches!(result, Err(BuildError::InvalidDimension(_))));

        // Ragged constraint matrix.
        let result = StandardForm::new(
            vec![1f64, 2f64],
            vec![vec![1f64, 2f64], vec![3f64]],
            vec![3f64, 4f64],
        );
        assert!(matches!(result, Err(BuildError::InvalidDimension(_))));

        // No rows at all.
        let result = StandardForm::<f64>::new(vec![], vec![], vec![]);
        assert!(matches!(result, Err(BuildError::InvalidDimension(_))));

        // More constraints than variables in direct standard form.
        let result = StandardForm::new(
            vec![1f64],
            vec![vec![1f64], vec![2f64]],
            vec![3f64, 4f64],
        );
        assert!(matches!(result, Err(BuildError::InvalidDimension(_))));
    }

    #[test]
    fn more_constraints_than_original_variables_is_fine_with_slacks() {
        let problem = StandardForm::with_slacks(
            vec![1f64],
            vec![vec![1f64], vec![2f64]],
            vec![3f64, 4f64],
        ).unwrap();

        assert_eq!(problem.nr_variables(), 3);
        assert_eq!(problem.nr_constraints(), 2);
    }
}
