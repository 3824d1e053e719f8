use crate::error::MatrixError;
use crate::traits::Validate;
use serde::{Deserialize, Serialize};
use std::slice::{ChunksExact, ChunksExactMut};

/// A dense `n x n` matrix of `f64`.
///
/// Elements are stored row-major in a single
/// contiguous buffer of exactly `size * size` values.
/// The size is fixed when the matrix is created:
/// binary arithmetic returns new matrices and the
/// in-place forms only ever touch element values.
///
/// # Examples
///
/// ## From rows
///
/// ```
/// use squaremat::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(1, 0).unwrap(), 3.0);
/// ```
///
/// ## In a `YAML` record
///
/// A matrix is (de)serialized as a list of rows:
///
/// ```
/// let yaml = "
/// - [1, 2]
/// - [3, 4]
/// ";
/// let m = squaremat::loads(yaml).unwrap();
/// assert_eq!(m.to_string(), "1 2\n3 4\n");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>")]
#[serde(into = "Vec<Vec<f64>>")]
pub struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

// Construction
impl SquareMatrix {
    /// Make an `n x n` matrix filled with zeros.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `n == 0` or if `n * n`
    /// overflows `usize`.
    pub fn zeros(n: usize) -> Result<Self, MatrixError> {
        Self::filled(n, 0.0)
    }

    /// Make the `n x n` identity matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `n == 0` or if `n * n`
    /// overflows `usize`.
    pub fn identity(n: usize) -> Result<Self, MatrixError> {
        let mut rv = Self::zeros(n)?;
        rv.data.iter_mut().step_by(n + 1).for_each(|x| *x = 1.0);
        Ok(rv)
    }

    /// Make a matrix from a literal of rows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `rows` is empty
    /// or if any row's length differs from the number of rows.
    ///
    /// ```
    /// use squaremat::{MatrixError, SquareMatrix};
    ///
    /// let empty: [[f64; 0]; 0] = [];
    /// assert!(matches!(
    ///     SquareMatrix::from_rows(&empty),
    ///     Err(MatrixError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        rows.validate(MatrixError::InvalidArgument)?;
        Ok(Self {
            size: rows.len(),
            data: rows
                .iter()
                .flat_map(|row| row.as_ref().iter().copied())
                .collect(),
        })
    }

    fn filled(n: usize, value: f64) -> Result<Self, MatrixError> {
        if n == 0 {
            return Err(MatrixError::InvalidArgument(
                "matrix size must be positive".to_string(),
            ));
        }
        let len = n.checked_mul(n).ok_or_else(|| {
            MatrixError::InvalidArgument(format!("matrix size {n} overflows the element count"))
        })?;
        Ok(Self {
            size: n,
            data: vec![value; len],
        })
    }

    // Callers guarantee data.len() == size * size
    pub(crate) fn from_raw_parts(size: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    /// Deconstruct the matrix into its rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

// Access
impl SquareMatrix {
    /// The number of rows (and of columns).
    pub fn size(&self) -> usize {
        self.size
    }

    fn offset(&self, row: usize, column: usize) -> Result<usize, MatrixError> {
        if row >= self.size || column >= self.size {
            Err(MatrixError::OutOfRange {
                row,
                column,
                size: self.size,
            })
        } else {
            Ok(row * self.size + column)
        }
    }

    /// Get the element at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is not in `[0, size)`.
    pub fn get(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        let offset = self.offset(row, column)?;
        Ok(self.data[offset])
    }

    /// Get a mutable reference to the element at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is not in `[0, size)`.
    ///
    /// ```
    /// let mut m = squaremat::SquareMatrix::zeros(2).unwrap();
    /// *m.get_mut(0, 1).unwrap() += 10.0;
    /// assert_eq!(m.get(0, 1).unwrap(), 10.0);
    /// ```
    pub fn get_mut(&mut self, row: usize, column: usize) -> Result<&mut f64, MatrixError> {
        let offset = self.offset(row, column)?;
        Ok(&mut self.data[offset])
    }

    /// Set the element at `(row, column)`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if either index is not in `[0, size)`.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<(), MatrixError> {
        *self.get_mut(row, column)? = value;
        Ok(())
    }

    /// Get a row as a slice.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `row` is not in `[0, size)`.
    pub fn row(&self, row: usize) -> Result<&[f64], MatrixError> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.size])
    }

    /// Get a row as a mutable slice.
    ///
    /// # Errors
    ///
    /// [`MatrixError::OutOfRange`] if `row` is not in `[0, size)`.
    pub fn row_mut(&mut self, row: usize) -> Result<&mut [f64], MatrixError> {
        let start = self.offset(row, 0)?;
        let end = start + self.size;
        Ok(&mut self.data[start..end])
    }

    /// Iterate over the rows, in order.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.size)
    }

    pub(crate) fn rows_mut(&mut self) -> ChunksExactMut<'_, f64> {
        self.data.chunks_exact_mut(self.size)
    }

    /// Iterate over all elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, f64> {
        self.data.iter_mut()
    }

    /// The sum of all elements.
    ///
    /// This is the quantity that orders matrices.
    /// See [`SquareMatrix::less_than`].
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    pub(crate) fn validate_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        if self.size != other.size {
            Err(MatrixError::SizeMismatch {
                lhs: self.size,
                rhs: other.size,
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn zip<'a, 'b>(
        &'a self,
        other: &'b Self,
    ) -> impl Iterator<Item = (&'a f64, &'b f64)> {
        self.data.iter().zip(other.data.iter())
    }

    pub(crate) fn zip_mut<'a, 'b>(
        &'a mut self,
        other: &'b Self,
    ) -> impl Iterator<Item = (&'a mut f64, &'b f64)> {
        self.data.iter_mut().zip(other.data.iter())
    }

    pub(crate) fn map<F: FnMut(f64) -> f64>(&self, f: F) -> Self {
        Self::from_raw_parts(self.size, self.data.iter().copied().map(f).collect())
    }
}

impl std::ops::Index<[usize; 2]> for SquareMatrix {
    type Output = f64;

    /// Indexing where the index is `[row, column]`.
    ///
    /// # Panics
    ///
    /// If either index is out of range.
    /// Use [`SquareMatrix::get`] for checked access.
    fn index(&self, index: [usize; 2]) -> &Self::Output {
        let [row, column] = index;
        assert!(
            row < self.size && column < self.size,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            column,
            self.size,
            self.size
        );
        &self.data[row * self.size + column]
    }
}

impl std::ops::IndexMut<[usize; 2]> for SquareMatrix {
    /// # Panics
    ///
    /// If either index is out of range.
    /// Use [`SquareMatrix::get_mut`] for checked access.
    fn index_mut(&mut self, index: [usize; 2]) -> &mut Self::Output {
        let [row, column] = index;
        assert!(
            row < self.size && column < self.size,
            "index ({}, {}) out of range for a {}x{} matrix",
            row,
            column,
            self.size,
            self.size
        );
        &mut self.data[row * self.size + column]
    }
}

impl TryFrom<Vec<Vec<f64>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(&value)
    }
}

impl From<SquareMatrix> for Vec<Vec<f64>> {
    fn from(value: SquareMatrix) -> Self {
        value.to_rows()
    }
}

/// One line per row, elements separated by a single space.
///
/// Every line, the last included, ends with `\n`.
/// There is no trailing space after the last element of a row,
/// so `[[1, 2], [3, 4]]` is written as `"1 2\n3 4\n"`.
impl std::fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let mut elements = row.iter();
            if let Some(first) = elements.next() {
                write!(f, "{first}")?;
            }
            for value in elements {
                write!(f, " {value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
