//! # Matrix implementations
//!
//! A row-major dense matrix with the operations the revised simplex method needs: column
//! extraction, horizontal concatenation for slack augmentation, matrix-vector products and
//! Gauss-Jordan inversion with a relative singularity test.
use std::cmp::Ordering;

use itertools::izip;
use num_traits::Float;

use crate::data::linear_algebra::vector::dot;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, PartialEq, Debug)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> DenseMatrix<F> {
    /// Create a `DenseMatrix` from the provided rows.
    ///
    /// All rows must have equal length; shape validation of user input happens before this point.
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(data.iter().all(|row| row.len() == data[0].len()));

        let nr_rows = data.len();
        let nr_columns = data[0].len();
        Self { data, nr_rows, nr_columns }
    }

    /// Create a square identity matrix of dimension `size`.
    pub fn identity(size: usize) -> Self {
        debug_assert!(size > 0);

        let data = (0..size)
            .map(|i| (0..size).map(|j| if i == j { F::one() } else { F::zero() }).collect())
            .collect();
        Self { data, nr_rows: size, nr_columns: size }
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix.
    pub fn hcat(self, other: Self) -> Self {
        debug_assert_eq!(other.nr_rows, self.nr_rows);

        let nr_columns = self.nr_columns + other.nr_columns;
        let data = izip!(self.data, other.data)
            .map(|(mut left, right)| {
                left.extend(right);
                left
            })
            .collect();
        Self { data, nr_rows: self.nr_rows, nr_columns }
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// The sub-matrix formed by the listed columns, in the listed order.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        Self {
            data: self.data.iter()
                .map(|row| columns.iter().map(|&j| row[j]).collect())
                .collect(),
            nr_rows: self.nr_rows,
            nr_columns: columns.len(),
        }
    }

    /// Compute the product of this matrix with a column vector.
    pub fn multiply(&self, vector: &[F]) -> Vec<F> {
        debug_assert_eq!(vector.len(), self.nr_columns);

        self.data.iter().map(|row| dot(row, vector)).collect()
    }

    /// Compute the product of a row vector with this matrix.
    pub fn left_multiply(&self, vector: &[F]) -> Vec<F> {
        debug_assert_eq!(vector.len(), self.nr_rows);

        (0..self.nr_columns)
            .map(|j| {
                izip!(vector, &self.data)
                    .fold(F::zero(), |total, (&value, row)| total + value * row[j])
            })
            .collect()
    }

    /// Invert this square matrix by Gauss-Jordan elimination with partial pivoting.
    ///
    /// A pivot is rejected when its magnitude does not exceed `relative_tolerance` times the
    /// largest absolute entry of the matrix. Scaling the matrix therefore does not change which
    /// matrices are considered singular, unlike a fixed determinant threshold would.
    ///
    /// # Return value
    ///
    /// The inverse, or `None` when the matrix is (numerically) singular.
    pub fn inverted(&self, relative_tolerance: F) -> Option<Self> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);
        debug_assert!(relative_tolerance >= F::zero());

        let size = self.nr_rows;
        let scale = self.data.iter()
            .flatten()
            .fold(F::zero(), |largest, &value| largest.max(value.abs()));
        let threshold = relative_tolerance * scale;

        // Augmented rows [self | I], reduced in place to [I | inverse].
        let mut rows = self.data.iter()
            .enumerate()
            .map(|(i, row)| {
                let mut augmented = row.clone();
                augmented.extend((0..size).map(|j| if i == j { F::one() } else { F::zero() }));
                augmented
            })
            .collect::<Vec<_>>();

        for column in 0..size {
            let (pivot_row, pivot) = (column..size)
                .map(|row| (row, rows[row][column]))
                .max_by(|(_, left), (_, right)| {
                    left.abs().partial_cmp(&right.abs()).unwrap_or(Ordering::Equal)
                })?;
            if pivot.abs() <= threshold {
                return None;
            }
            rows.swap(column, pivot_row);

            for value in rows[column].iter_mut() {
                *value = *value / pivot;
            }
            for row in 0..size {
                if row != column {
                    let factor = rows[row][column];
                    if factor != F::zero() {
                        for j in 0..(2 * size) {
                            rows[row][j] = rows[row][j] - factor * rows[column][j];
                        }
                    }
                }
            }
        }

        let data = rows.into_iter().map(|row| row[size..].to_vec()).collect();
        Some(Self { data, nr_rows: size, nr_columns: size })
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::matrix::DenseMatrix;

    fn matrices_equal(left: &DenseMatrix<f64>, right: &DenseMatrix<f64>, tolerance: f64) -> bool {
        left.nr_rows() == right.nr_rows()
            && left.nr_columns() == right.nr_columns()
            && (0..left.nr_rows()).all(|i| {
                (0..left.nr_columns()).all(|j| {
                    (left.get_value(i, j) - right.get_value(i, j)).abs() < tolerance
                })
            })
    }

    #[test]
    fn column_and_row_extraction() {
        let matrix = DenseMatrix::from_data(vec![
            vec![1f64, 2f64, 3f64],
            vec![4f64, 5f64, 6f64],
        ]);

        assert_eq!(matrix.column(1), vec![2f64, 5f64]);
        assert_eq!(matrix.row(1), &[4f64, 5f64, 6f64]);

        let selected = matrix.select_columns(&[2, 0]);
        assert_eq!(selected.row(0), &[3f64, 1f64]);
        assert_eq!(selected.row(1), &[6f64, 4f64]);
    }

    #[test]
    fn hcat_appends_columns() {
        let left = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![3f64, 4f64],
        ]);
        let combined = left.hcat(DenseMatrix::identity(2));

        assert_eq!(combined.nr_columns(), 4);
        assert_eq!(combined.row(0), &[1f64, 2f64, 1f64, 0f64]);
        assert_eq!(combined.row(1), &[3f64, 4f64, 0f64, 1f64]);
    }

    #[test]
    fn products() {
        let matrix = DenseMatrix::from_data(vec![
            vec![1f64, 2f64],
            vec![3f64, 4f64],
        ]);

        assert_eq!(matrix.multiply(&[1f64, 1f64]), vec![3f64, 7f64]);
        assert_eq!(matrix.left_multiply(&[1f64, 1f64]), vec![4f64, 6f64]);
    }

    #[test]
    fn inversion_of_identity() {
        let identity = DenseMatrix::<f64>::identity(3);
        let inverse = identity.inverted(f64::EPSILON).unwrap();
        assert!(matrices_equal(&inverse, &DenseMatrix::identity(3), 1e-12));
    }

    #[test]
    fn inversion_roundtrip() {
        let matrix = DenseMatrix::from_data(vec![
            vec![1f64, 2f64, -3f64],
            vec![-2f64, 0f64, 3f64],
            vec![1f64, 1f64, 0f64],
        ]);
        let inverse = matrix.inverted(f64::EPSILON).unwrap();

        let mut product_columns = Vec::new();
        for j in 0..3 {
            product_columns.push(matrix.multiply(&inverse.column(j)));
        }
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1f64 } else { 0f64 };
                assert!((product_columns[j][i] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let matrix = DenseMatrix::from_data(vec![
            vec![1f64, 1f64],
            vec![2f64, 2f64],
        ]);
        assert_eq!(matrix.inverted(f64::EPSILON), None);

        let zero = DenseMatrix::from_data(vec![vec![0f64]]);
        assert_eq!(zero.inverted(f64::EPSILON), None);
    }

    #[test]
    fn singularity_test_is_scale_invariant() {
        // A tiny but perfectly conditioned matrix must invert; a fixed determinant threshold
        // would reject it.
        let tiny = DenseMatrix::from_data(vec![
            vec![1e-8f64, 0f64],
            vec![0f64, 1e-8f64],
        ]);
        let inverse = tiny.inverted(1e-12).unwrap();
        assert!((inverse.get_value(0, 0) - 1e8).abs() < 1e-3);

        let huge = DenseMatrix::from_data(vec![
            vec![1e8f64, 1e8f64],
            vec![2e8f64, 2e8f64],
        ]);
        assert_eq!(huge.inverted(1e-12), None);
    }
}
