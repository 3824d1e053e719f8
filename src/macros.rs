#![macro_use]

// Matrix-matrix operators are fallible because the operand sizes may differ.
// The inherent method is named by path: `self.add(..)` on an owned
// receiver would resolve to `std::ops::Add::add` and recurse.
macro_rules! impl_matrix_binary_op {
    ($op: ident, $fn: ident, $method: ident) => {
        impl std::ops::$op<&$crate::SquareMatrix> for &$crate::SquareMatrix {
            type Output = Result<$crate::SquareMatrix, $crate::MatrixError>;
            fn $fn(self, rhs: &$crate::SquareMatrix) -> Self::Output {
                $crate::SquareMatrix::$method(self, rhs)
            }
        }

        impl std::ops::$op<$crate::SquareMatrix> for &$crate::SquareMatrix {
            type Output = Result<$crate::SquareMatrix, $crate::MatrixError>;
            fn $fn(self, rhs: $crate::SquareMatrix) -> Self::Output {
                $crate::SquareMatrix::$method(self, &rhs)
            }
        }

        impl std::ops::$op<&$crate::SquareMatrix> for $crate::SquareMatrix {
            type Output = Result<$crate::SquareMatrix, $crate::MatrixError>;
            fn $fn(self, rhs: &$crate::SquareMatrix) -> Self::Output {
                $crate::SquareMatrix::$method(&self, rhs)
            }
        }

        impl std::ops::$op<$crate::SquareMatrix> for $crate::SquareMatrix {
            type Output = Result<$crate::SquareMatrix, $crate::MatrixError>;
            fn $fn(self, rhs: $crate::SquareMatrix) -> Self::Output {
                $crate::SquareMatrix::$method(&self, &rhs)
            }
        }
    };
}

macro_rules! impl_matrix_scalar_op {
    ($op: ident, $fn: ident, $scalar: ty, $method: ident, $output: ty) => {
        impl std::ops::$op<$scalar> for &$crate::SquareMatrix {
            type Output = $output;
            fn $fn(self, rhs: $scalar) -> Self::Output {
                $crate::SquareMatrix::$method(self, rhs)
            }
        }

        impl std::ops::$op<$scalar> for $crate::SquareMatrix {
            type Output = $output;
            fn $fn(self, rhs: $scalar) -> Self::Output {
                $crate::SquareMatrix::$method(&self, rhs)
            }
        }
    };
}
