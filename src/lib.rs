//! Dense square matrices of `f64`.
//!
//! [`SquareMatrix`] is an `n x n` value type with
//! arithmetic, comparison, and transform operations.
//!
//! # Example
//!
//! ```
//! use squaremat::SquareMatrix;
//!
//! let a = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap();
//! let b = SquareMatrix::from_rows(&[[5., 6.], [7., 8.]]).unwrap();
//!
//! let sum = (&a + &b).unwrap();
//! assert_eq!(sum.to_string(), "6 8\n10 12\n");
//!
//! // Matrix-matrix operators return a Result because sizes may differ
//! let c = SquareMatrix::identity(3).unwrap();
//! assert!(matches!(&a * &c, Err(squaremat::MatrixError::SizeMismatch { lhs: 2, rhs: 3 })));
//! ```
//!
//! # Operators
//!
//! | Operation | Method | Operator |
//! |---|---|---|
//! | sum | [`SquareMatrix::add`] | `a + b` |
//! | difference | [`SquareMatrix::subtract`] | `a - b` |
//! | matrix product | [`SquareMatrix::mat_mul`] | `a * b` |
//! | Hadamard product | [`SquareMatrix::elementwise_mul`] | |
//! | scale | [`SquareMatrix::scale`] | `a * 2.0`, `2.0 * a`, `a *= 2.0` |
//! | scalar division | [`SquareMatrix::divide`] | `a / 2.0` |
//! | truncating modulo | [`SquareMatrix::modulo`] | `a % 3` |
//! | negation | [`SquareMatrix::negate`] | `-a` |
//!
//! Ordering is defined on the sum of all elements.
//! See [`SquareMatrix::less_than`].

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]

mod macros;

mod arithmetic;
mod comparison;
mod error;
mod io;
mod square_matrix;
mod traits;
mod transform;

pub use error::MatrixError;
pub use io::{load, loads};
pub use square_matrix::SquareMatrix;
pub use transform::SINGULARITY_TOLERANCE;

#[cfg(feature = "json")]
pub use io::{load_json, loads_json};
