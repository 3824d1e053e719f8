use crate::error::MatrixError;
use crate::square_matrix::SquareMatrix;

/// Pivots with an absolute value below this are treated
/// as zero by [`SquareMatrix::determinant`].
pub const SINGULARITY_TOLERANCE: f64 = 1e-9;

impl SquareMatrix {
    /// Return a new matrix with every element negated.
    pub fn negate(&self) -> Self {
        self.map(|x| -x)
    }

    /// Return the transpose.
    pub fn transpose(&self) -> Self {
        let n = self.size();
        let mut rv = Self::from_raw_parts(n, vec![0.0; n * n]);
        for (i, row) in self.rows().enumerate() {
            for (j, value) in row.iter().enumerate() {
                rv[[j, i]] = *value;
            }
        }
        rv
    }

    /// Calculate the determinant by Gaussian elimination
    /// with partial pivoting.
    ///
    /// For each column the row with the largest absolute value
    /// on or below the diagonal is swapped into place.
    /// If that pivot is smaller in magnitude than
    /// [`SINGULARITY_TOLERANCE`], the matrix is singular
    /// and the result is exactly `0.0`.
    ///
    /// The input is not modified: elimination works on a copy.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let a = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
    /// assert!((a.determinant() + 2.0).abs() < 1e-12);
    /// ```
    pub fn determinant(&self) -> f64 {
        let n = self.size();
        let mut m = self.to_rows();
        let mut det = 1.0;
        let mut swaps = 0_usize;

        for i in 0..n {
            let mut pivot = i;
            for j in i + 1..n {
                if m[j][i].abs() > m[pivot][i].abs() {
                    pivot = j;
                }
            }

            if m[pivot][i].abs() < SINGULARITY_TOLERANCE {
                return 0.0;
            }

            if pivot != i {
                m.swap(i, pivot);
                swaps += 1;
            }

            det *= m[i][i];
            let (upper, lower) = m.split_at_mut(i + 1);
            let pivot_row = &upper[i];
            for row in lower.iter_mut() {
                let factor = row[i] / pivot_row[i];
                for k in i..n {
                    row[k] -= factor * pivot_row[k];
                }
            }
        }

        if swaps % 2 == 0 {
            det
        } else {
            -det
        }
    }

    /// Raise the matrix to a non-negative integer power
    /// by repeated squaring.
    ///
    /// `power(0)` is the identity matrix, whatever the contents of `self`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `exponent < 0`.
    pub fn power(&self, exponent: i64) -> Result<Self, MatrixError> {
        if exponent < 0 {
            return Err(MatrixError::InvalidArgument(format!(
                "negative powers are not supported, got: {exponent}"
            )));
        }
        let mut exponent = exponent;
        let mut rv = Self::identity(self.size())?;
        let mut base = self.clone();
        while exponent > 0 {
            if exponent & 1 == 1 {
                rv = rv.mat_mul(&base)?;
            }
            base = base.mat_mul(&base)?;
            exponent >>= 1;
        }
        Ok(rv)
    }
}

// Increment and decrement
impl SquareMatrix {
    /// Add one to every element.
    ///
    /// Returns `self` to allow chaining, like a prefix `++`.
    pub fn increment(&mut self) -> &mut Self {
        self.iter_mut().for_each(|x| *x += 1.0);
        self
    }

    /// Subtract one from every element.
    pub fn decrement(&mut self) -> &mut Self {
        self.iter_mut().for_each(|x| *x -= 1.0);
        self
    }

    /// Add one to every element, returning a copy
    /// of the matrix as it was before the change.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let mut m = SquareMatrix::zeros(2).unwrap();
    /// let before = m.post_increment();
    /// assert_eq!(before.sum(), 0.0);
    /// assert_eq!(m.sum(), 4.0);
    /// ```
    pub fn post_increment(&mut self) -> Self {
        let snapshot = self.clone();
        self.increment();
        snapshot
    }

    /// Subtract one from every element, returning a copy
    /// of the matrix as it was before the change.
    pub fn post_decrement(&mut self) -> Self {
        let snapshot = self.clone();
        self.decrement();
        snapshot
    }
}

impl std::ops::Neg for SquareMatrix {
    type Output = SquareMatrix;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::ops::Neg for &SquareMatrix {
    type Output = SquareMatrix;
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_3x3() {
        let m = SquareMatrix::from_rows(&[[1., 2., 3.], [4., 5., 6.], [7., 8., 9.]]).unwrap();
        let t = m.transpose();
        assert_eq!(
            t.to_rows(),
            vec![vec![1., 4., 7.], vec![2., 5., 8.], vec![3., 6., 9.]]
        );
    }

    #[test]
    fn test_determinant_needs_pivot() {
        // zero in the top-left forces a row swap
        let m = SquareMatrix::from_rows(&[[0., 1.], [1., 0.]]).unwrap();
        assert_eq!(m.determinant(), -1.0);
    }

    #[test]
    fn test_determinant_3x3() {
        let m = SquareMatrix::from_rows(&[[2., 0., 1.], [1., 3., 2.], [1., 1., 2.]]).unwrap();
        assert!((m.determinant() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_determinant_does_not_modify_input() {
        let m = SquareMatrix::from_rows(&[[0., 1.], [1., 0.]]).unwrap();
        let copy = m.clone();
        let _ = m.determinant();
        assert_eq!(m, copy);
    }

    #[test]
    fn test_power_zero_is_identity() {
        let m = SquareMatrix::from_rows(&[[f64::NAN, 2.], [3., 4.]]).unwrap();
        assert_eq!(m.power(0).unwrap(), SquareMatrix::identity(2).unwrap());
    }

    #[test]
    fn test_power_negative() {
        let m = SquareMatrix::identity(2).unwrap();
        assert!(matches!(m.power(-1), Err(MatrixError::InvalidArgument(_))));
    }

    #[test]
    fn test_power_odd() {
        let m = SquareMatrix::from_rows(&[[1., 1.], [1., 0.]]).unwrap();
        // Fibonacci
        let p = m.power(5).unwrap();
        assert_eq!(p.to_rows(), vec![vec![8., 5.], vec![5., 3.]]);
    }

    #[test]
    fn test_decrement_chain() {
        let mut m = SquareMatrix::zeros(2).unwrap();
        m.decrement().decrement();
        assert!(m.iter().all(|&x| x == -2.0));
        let before = m.post_decrement();
        assert!(before.iter().all(|&x| x == -2.0));
        assert!(m.iter().all(|&x| x == -3.0));
    }
}
