use crate::square_matrix::SquareMatrix;
use std::cmp::Ordering;

/// Two matrices are equal if they have the same size
/// and all elements compare equal exactly.
impl PartialEq for SquareMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.zip(other).all(|(a, b)| a == b)
    }
}

// Ordering is by the sum of all elements.
//
// `PartialOrd` is not implemented: matrices that differ but have
// equal sums would compare as `Equal` while `==` is false.
impl SquareMatrix {
    /// Compare the sums of all elements.
    ///
    /// Returns `None` if either sum is NaN.
    pub fn compare_sums(&self, other: &Self) -> Option<Ordering> {
        self.sum().partial_cmp(&other.sum())
    }

    /// `true` if the sum of `self` is less than the sum of `other`.
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let a = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
    /// let b = SquareMatrix::from_rows(&[[4., 3.], [2., 1.]]).unwrap();
    /// assert!(!a.less_than(&b));
    /// assert!(!a.greater_than(&b));
    /// assert!(a.less_equal(&b) && a.greater_equal(&b));
    /// assert_ne!(a, b);
    /// ```
    pub fn less_than(&self, other: &Self) -> bool {
        self.sum() < other.sum()
    }

    /// `true` if the sum of `self` is greater than the sum of `other`.
    pub fn greater_than(&self, other: &Self) -> bool {
        self.sum() > other.sum()
    }

    /// Negation of [`SquareMatrix::greater_than`].
    pub fn less_equal(&self, other: &Self) -> bool {
        !self.greater_than(other)
    }

    /// Negation of [`SquareMatrix::less_than`].
    pub fn greater_equal(&self, other: &Self) -> bool {
        !self.less_than(other)
    }
}
