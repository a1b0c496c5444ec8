//! # Basis bookkeeping
//!
//! The basis is the ordered set of variable indices currently allowed to take nonzero values.
//! Together with its complement it partitions all variable indices; a pivot exchanges exactly one
//! index between the two sides.
use std::collections::HashSet;
use std::mem;

/// Ordered basic variable indices and their nonbasic complement.
///
/// The basic side always has exactly as many entries as the problem has constraints. Pivots are
/// positional: the entering index takes the slot of the leaving index and vice versa, so both
/// orderings are stable apart from the exchanged slots.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Basis {
    basic: Vec<usize>,
    nonbasic: Vec<usize>,
}

impl Basis {
    /// The all-slack starting basis: the trailing `nr_constraints` variable indices.
    pub fn slacks(nr_variables: usize, nr_constraints: usize) -> Self {
        debug_assert!(0 < nr_constraints && nr_constraints <= nr_variables);

        let basis = Self {
            basic: ((nr_variables - nr_constraints)..nr_variables).collect(),
            nonbasic: (0..(nr_variables - nr_constraints)).collect(),
        };
        debug_assert!(basis.is_partition());
        basis
    }

    /// Indices of the basic variables, ordered by basis row.
    pub fn basic(&self) -> &[usize] {
        &self.basic
    }

    /// Indices of the variables currently fixed at zero.
    pub fn nonbasic(&self) -> &[usize] {
        &self.nonbasic
    }

    /// Exchange the nonbasic variable at `entering_position` with the basic variable at
    /// `leaving_position`.
    pub fn exchange(&mut self, entering_position: usize, leaving_position: usize) {
        debug_assert!(entering_position < self.nonbasic.len());
        debug_assert!(leaving_position < self.basic.len());

        mem::swap(
            &mut self.basic[leaving_position],
            &mut self.nonbasic[entering_position],
        );

        debug_assert!(self.is_partition());
    }

    /// Whether the two sides together cover `0..n` exactly once.
    fn is_partition(&self) -> bool {
        let nr_variables = self.basic.len() + self.nonbasic.len();
        let all = self.basic.iter()
            .chain(self.nonbasic.iter())
            .copied()
            .collect::<HashSet<_>>();

        all.len() == nr_variables && all.iter().all(|&index| index < nr_variables)
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::revised_simplex::basis::Basis;

    #[test]
    fn slack_basis_takes_trailing_indices() {
        let basis = Basis::slacks(6, 3);
        assert_eq!(basis.basic(), &[3, 4, 5]);
        assert_eq!(basis.nonbasic(), &[0, 1, 2]);
    }

    #[test]
    fn exchange_is_positional() {
        let mut basis = Basis::slacks(5, 2);
        assert_eq!(basis.basic(), &[3, 4]);

        basis.exchange(1, 0);
        assert_eq!(basis.basic(), &[1, 4]);
        assert_eq!(basis.nonbasic(), &[0, 3, 2]);

        basis.exchange(2, 1);
        assert_eq!(basis.basic(), &[1, 2]);
        assert_eq!(basis.nonbasic(), &[0, 3, 4]);
    }
}
