use crate::error::MatrixError;
use crate::square_matrix::SquareMatrix;

fn truncating_rem(value: f64, divisor: i64) -> f64 {
    // `as` truncates toward zero and saturates out-of-range values
    (value as i64).wrapping_rem(divisor) as f64
}

fn check_divisor<T: PartialEq + Default>(divisor: T) -> Result<(), MatrixError> {
    if divisor == T::default() {
        Err(MatrixError::DivisionByZero)
    } else {
        Ok(())
    }
}

// Binary arithmetic
impl SquareMatrix {
    /// Elementwise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::SizeMismatch`] if the sizes differ.
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        self.validate_same_size(other)?;
        Ok(Self::from_raw_parts(
            self.size(),
            self.zip(other).map(|(a, b)| a + b).collect(),
        ))
    }

    /// Elementwise difference.
    ///
    /// # Errors
    ///
    /// [`MatrixError::SizeMismatch`] if the sizes differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        self.validate_same_size(other)?;
        Ok(Self::from_raw_parts(
            self.size(),
            self.zip(other).map(|(a, b)| a - b).collect(),
        ))
    }

    /// Matrix product: `result[i][j] = sum_k self[i][k] * other[k][j]`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::SizeMismatch`] if the sizes differ.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let a = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
    /// let b = SquareMatrix::from_rows(&[[5., 6.], [7., 8.]]).unwrap();
    /// let c = a.mat_mul(&b).unwrap();
    /// assert_eq!(c.to_rows(), vec![vec![19., 22.], vec![43., 50.]]);
    /// ```
    pub fn mat_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.validate_same_size(other)?;
        let n = self.size();
        let mut rv = Self::from_raw_parts(n, vec![0.0; n * n]);
        for (out_row, lhs_row) in rv.rows_mut().zip(self.rows()) {
            for (j, out) in out_row.iter_mut().enumerate() {
                for (a, rhs_row) in lhs_row.iter().zip(other.rows()) {
                    *out += a * rhs_row[j];
                }
            }
        }
        Ok(rv)
    }

    /// Hadamard (elementwise) product.
    ///
    /// # Errors
    ///
    /// [`MatrixError::SizeMismatch`] if the sizes differ.
    pub fn elementwise_mul(&self, other: &Self) -> Result<Self, MatrixError> {
        self.validate_same_size(other)?;
        Ok(Self::from_raw_parts(
            self.size(),
            self.zip(other).map(|(a, b)| a * b).collect(),
        ))
    }
}

// Scalar arithmetic
impl SquareMatrix {
    /// Multiply every element by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        self.map(|x| x * factor)
    }

    /// Divide every element by `scalar`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DivisionByZero`] if `scalar == 0`.
    pub fn divide(&self, scalar: f64) -> Result<Self, MatrixError> {
        check_divisor(scalar)?;
        Ok(self.map(|x| x / scalar))
    }

    /// Truncate every element toward zero and take the integer
    /// remainder by `scalar`.
    ///
    /// The sign of each result follows the (truncated) element,
    /// so `-7.9 % 3` gives `-1`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::DivisionByZero`] if `scalar == 0`.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let a = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
    /// let r = a.modulo(3).unwrap();
    /// assert_eq!(r.to_rows(), vec![vec![1., 2.], vec![0., 1.]]);
    /// ```
    pub fn modulo(&self, scalar: i64) -> Result<Self, MatrixError> {
        check_divisor(scalar)?;
        Ok(self.map(|x| truncating_rem(x, scalar)))
    }
}

// In-place arithmetic.
// Validation happens before any element is touched,
// so a failed call leaves the receiver unchanged.
impl SquareMatrix {
    /// Add `other` into `self`.
    ///
    /// Returns `self` to allow chaining.
    ///
    /// # Errors
    ///
    /// [`MatrixError::SizeMismatch`] if the sizes differ.
    pub fn add_into(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        self.validate_same_size(other)?;
        self.zip_mut(other).for_each(|(a, b)| *a += b);
        Ok(self)
    }

    /// Subtract `other` from `self`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::SizeMismatch`] if the sizes differ.
    pub fn subtract_into(&mut self, other: &Self) -> Result<&mut Self, MatrixError> {
        self.validate_same_size(other)?;
        self.zip_mut(other).for_each(|(a, b)| *a -= b);
        Ok(self)
    }

    /// Scale `self` by `factor`.
    pub fn scale_into(&mut self, factor: f64) -> &mut Self {
        self.iter_mut().for_each(|x| *x *= factor);
        self
    }

    /// # Errors
    ///
    /// [`MatrixError::DivisionByZero`] if `scalar == 0`.
    pub fn divide_into(&mut self, scalar: f64) -> Result<&mut Self, MatrixError> {
        check_divisor(scalar)?;
        self.iter_mut().for_each(|x| *x /= scalar);
        Ok(self)
    }

    /// In-place form of [`SquareMatrix::modulo`].
    ///
    /// # Errors
    ///
    /// [`MatrixError::DivisionByZero`] if `scalar == 0`.
    pub fn modulo_into(&mut self, scalar: i64) -> Result<&mut Self, MatrixError> {
        check_divisor(scalar)?;
        self.iter_mut().for_each(|x| *x = truncating_rem(*x, scalar));
        Ok(self)
    }
}

impl_matrix_binary_op!(Add, add, add);
impl_matrix_binary_op!(Sub, sub, subtract);
impl_matrix_binary_op!(Mul, mul, mat_mul);

impl_matrix_scalar_op!(Mul, mul, f64, scale, SquareMatrix);
impl_matrix_scalar_op!(Div, div, f64, divide, Result<SquareMatrix, MatrixError>);
impl_matrix_scalar_op!(Rem, rem, i64, modulo, Result<SquareMatrix, MatrixError>);

impl std::ops::Mul<SquareMatrix> for f64 {
    type Output = SquareMatrix;
    fn mul(self, rhs: SquareMatrix) -> Self::Output {
        rhs.scale(self)
    }
}

impl std::ops::Mul<&SquareMatrix> for f64 {
    type Output = SquareMatrix;
    fn mul(self, rhs: &SquareMatrix) -> Self::Output {
        rhs.scale(self)
    }
}

impl std::ops::MulAssign<f64> for SquareMatrix {
    fn mul_assign(&mut self, factor: f64) {
        self.scale_into(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> SquareMatrix {
        SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap()
    }

    fn b() -> SquareMatrix {
        SquareMatrix::from_rows(&[[5., 6.], [7., 8.]]).unwrap()
    }

    #[test]
    fn test_truncating_rem() {
        assert_eq!(truncating_rem(7.9, 3), 1.0);
        assert_eq!(truncating_rem(-7.9, 3), -1.0);
        assert_eq!(truncating_rem(7.0, -3), 1.0);
        assert_eq!(truncating_rem(0.5, 3), 0.0);
        assert_eq!(truncating_rem(f64::NAN, 3), 0.0);
    }

    #[test]
    fn test_operators_match_methods() {
        assert_eq!((&a() + &b()).unwrap(), a().add(&b()).unwrap());
        assert_eq!((a() - b()).unwrap(), a().subtract(&b()).unwrap());
        assert_eq!((&a() * b()).unwrap(), a().mat_mul(&b()).unwrap());
        assert_eq!(a() * 2.0, a().scale(2.0));
        assert_eq!(2.0 * &a(), a().scale(2.0));
        assert_eq!((a() / 2.0).unwrap(), a().divide(2.0).unwrap());
        assert_eq!((&a() % 3).unwrap(), a().modulo(3).unwrap());
    }

    #[test]
    fn test_mul_assign() {
        let mut m = a();
        m *= 3.0;
        assert_eq!(m.to_rows(), vec![vec![3., 6.], vec![9., 12.]]);
    }

    #[test]
    fn test_failed_in_place_leaves_receiver_unchanged() {
        let mut m = a();
        let big = SquareMatrix::zeros(3).unwrap();
        assert!(m.add_into(&big).is_err());
        assert!(m.divide_into(0.0).is_err());
        assert!(m.modulo_into(0).is_err());
        assert_eq!(m, a());
    }

    #[test]
    fn test_modulo_min_value() {
        let m = SquareMatrix::from_rows(&[[i64::MIN as f64]]).unwrap();
        assert_eq!(m.modulo(-1).unwrap().get(0, 0).unwrap(), 0.0);
    }
}
