use thiserror::Error;

/// Error type for this crate.
///
/// Every fallible operation on a [`SquareMatrix`](crate::SquareMatrix)
/// reports one of these variants to its immediate caller.
/// Nothing is recovered from internally.
///
/// # Example
///
/// A ragged literal is not a square matrix:
///
/// ```
/// use squaremat::{MatrixError, SquareMatrix};
///
/// let rows = vec![vec![1.0, 2.0], vec![3.0]];
/// assert!(matches!(
///     SquareMatrix::try_from(rows),
///     Err(MatrixError::InvalidArgument(_))
/// ));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatrixError {
    /// Empty input, ragged or non-square rows, a size whose
    /// element count overflows, or a negative power.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// An element or row index outside of `[0, size)`.
    #[error("index ({row}, {column}) out of range for a {size}x{size} matrix")]
    OutOfRange {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Size of the matrix that was indexed
        size: usize,
    },
    /// A binary operation on matrices of different sizes.
    #[error("matrix size mismatch: {lhs}x{lhs} vs {rhs}x{rhs}")]
    SizeMismatch {
        /// Size of the left operand
        lhs: usize,
        /// Size of the right operand
        rhs: usize,
    },
    /// Scalar division or modulo by zero.
    #[error("division by zero")]
    DivisionByZero,
    #[error(transparent)]
    /// Errors coming from `serde_yaml`.
    YamlError(#[from] serde_yaml::Error),
    #[cfg(feature = "json")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "json")))]
    #[error(transparent)]
    /// Errors coming from `serde_json`.
    JsonError(#[from] serde_json::Error),
}
