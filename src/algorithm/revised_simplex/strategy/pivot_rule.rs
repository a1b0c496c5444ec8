//! # Pivot rules
//!
//! Strategies for choosing the entering variable. The leaving variable is always determined by
//! the minimum-ratio test and is not part of the strategy.
use num_traits::Float;

/// Deciding which nonbasic variable enters the basis.
///
/// A rule is handed the nonbasic indices in their current order and an oracle computing the
/// reduced cost of a variable. Returning `None` asserts that no reduced cost is negative, which
/// the driver reads as optimality; rules must therefore only return `None` in that situation.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new() -> Self;

    /// Select the entering variable.
    ///
    /// # Arguments
    ///
    /// * `nonbasic`: Indices of the variables currently not in the basis.
    /// * `reduced_cost`: Computes the reduced cost of a variable by index.
    ///
    /// # Return value
    ///
    /// The position within `nonbasic` and the index of the chosen variable, or `None` when no
    /// variable has a negative reduced cost.
    fn select_entering(
        &mut self,
        nonbasic: &[usize],
        reduced_cost: impl Fn(usize) -> F,
    ) -> Option<(usize, usize)>;
}

/// Dantzig's rule: pivot on the variable with the most negative reduced cost.
///
/// Ties are broken by first occurrence in the nonbasic ordering, which keeps the pivot sequence
/// deterministic. No anti-cycling guarantee.
pub struct Dantzig;

impl<F: Float> PivotRule<F> for Dantzig {
    fn new() -> Self {
        Self
    }

    fn select_entering(
        &mut self,
        nonbasic: &[usize],
        reduced_cost: impl Fn(usize) -> F,
    ) -> Option<(usize, usize)> {
        let mut most_negative: Option<(usize, usize, F)> = None;
        for (position, &index) in nonbasic.iter().enumerate() {
            let cost = reduced_cost(index);
            if cost < F::zero() {
                if let Some((existing_position, existing_index, existing_cost)) = most_negative.as_mut() {
                    if cost < *existing_cost {
                        *existing_position = position;
                        *existing_index = index;
                        *existing_cost = cost;
                    }
                } else {
                    most_negative = Some((position, index, cost));
                }
            }
        }

        most_negative.map(|(position, index, _)| (position, index))
    }
}

/// Bland's rule: pivot on the lowest-indexed variable with a negative reduced cost.
///
/// Slower in practice than [`Dantzig`], but combined with the first-minimal-ratio row choice it
/// prevents cycling on degenerate problems.
pub struct Bland;

impl<F: Float> PivotRule<F> for Bland {
    fn new() -> Self {
        Self
    }

    fn select_entering(
        &mut self,
        nonbasic: &[usize],
        reduced_cost: impl Fn(usize) -> F,
    ) -> Option<(usize, usize)> {
        nonbasic.iter()
            .enumerate()
            .filter(|&(_, &index)| reduced_cost(index) < F::zero())
            .min_by_key(|&(_, &index)| index)
            .map(|(position, &index)| (position, index))
    }
}
