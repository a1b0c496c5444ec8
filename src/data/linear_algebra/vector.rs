//! # Vector operations
use itertools::izip;
use num_traits::Float;

/// Compute the inner product of two equally long vectors.
pub fn dot<F: Float>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    izip!(left, right).fold(F::zero(), |total, (&x, &y)| total + x * y)
}
