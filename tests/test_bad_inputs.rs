use squaremat::{MatrixError, SquareMatrix};

fn a() -> SquareMatrix {
    SquareMatrix::from_rows(&[[1., 2.], [3., 4.]]).unwrap()
}

#[test]
fn ragged_rows() {
    let rows = vec![vec![1., 2.], vec![3.]];
    assert!(matches!(
        SquareMatrix::try_from(rows),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn non_square_rows() {
    let rows = [[1., 2., 3.], [4., 5., 6.]];
    assert!(matches!(
        SquareMatrix::from_rows(&rows),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn empty_rows() {
    assert!(matches!(
        SquareMatrix::try_from(Vec::<Vec<f64>>::new()),
        Err(MatrixError::InvalidArgument(_))
    ));
    // One empty row is not a 1x1 matrix
    assert!(matches!(
        SquareMatrix::try_from(vec![Vec::<f64>::new()]),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn zero_size() {
    assert!(matches!(
        SquareMatrix::zeros(0),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn out_of_range_access() {
    let mut m = a();
    assert!(matches!(
        m.get(2, 0),
        Err(MatrixError::OutOfRange {
            row: 2,
            column: 0,
            size: 2
        })
    ));
    assert!(matches!(m.get(0, 2), Err(MatrixError::OutOfRange { .. })));
    assert!(matches!(
        m.set(5, 5, 1.0),
        Err(MatrixError::OutOfRange { .. })
    ));
    assert!(matches!(m.get_mut(0, 9), Err(MatrixError::OutOfRange { .. })));
    assert!(matches!(m.row_mut(2), Err(MatrixError::OutOfRange { .. })));
    assert_eq!(m, a());
}

#[test]
#[should_panic]
fn out_of_range_index() {
    let m = a();
    let _ = m[[2, 0]];
}

#[test]
#[should_panic]
fn out_of_range_index_mut() {
    let mut m = a();
    m[[0, 2]] = 1.0;
}

#[test]
fn size_mismatch() {
    let x = a();
    let y = SquareMatrix::identity(3).unwrap();
    let is_mismatch =
        |r: Result<SquareMatrix, MatrixError>| matches!(r, Err(MatrixError::SizeMismatch { lhs: 2, rhs: 3 }));
    assert!(is_mismatch(x.add(&y)));
    assert!(is_mismatch(x.subtract(&y)));
    assert!(is_mismatch(x.mat_mul(&y)));
    assert!(is_mismatch(x.elementwise_mul(&y)));
    assert!(is_mismatch(&x + &y));
    assert!(is_mismatch(&x - &y));
    assert!(is_mismatch(&x * &y));
}

#[test]
fn in_place_size_mismatch() {
    let mut x = a();
    let y = SquareMatrix::identity(3).unwrap();
    assert!(matches!(
        x.add_into(&y),
        Err(MatrixError::SizeMismatch { .. })
    ));
    assert!(matches!(
        x.subtract_into(&y),
        Err(MatrixError::SizeMismatch { .. })
    ));
    assert_eq!(x, a());
}

#[test]
fn division_by_zero() {
    assert!(matches!(a().divide(0.0), Err(MatrixError::DivisionByZero)));
    assert!(matches!(a().divide(-0.0), Err(MatrixError::DivisionByZero)));
    assert!(matches!(&a() / 0.0, Err(MatrixError::DivisionByZero)));
    assert!(matches!(a().modulo(0), Err(MatrixError::DivisionByZero)));
    let mut m = a();
    assert!(matches!(m.divide_into(0.0), Err(MatrixError::DivisionByZero)));
    assert!(matches!(m.modulo_into(0), Err(MatrixError::DivisionByZero)));
}

#[test]
fn negative_power() {
    assert!(matches!(
        a().power(-2),
        Err(MatrixError::InvalidArgument(_))
    ));
}

#[test]
fn bad_yaml() {
    assert!(matches!(
        squaremat::loads("- [1, 2]\n- [3]\n"),
        Err(MatrixError::YamlError(_))
    ));
    assert!(squaremat::loads("not a matrix").is_err());
    assert!(squaremat::loads("[[1, a]]").is_err());
}

#[test]
fn error_messages() {
    let e = a().get(2, 0).unwrap_err();
    assert_eq!(e.to_string(), "index (2, 0) out of range for a 2x2 matrix");
    let e = a().add(&SquareMatrix::zeros(3).unwrap()).unwrap_err();
    assert_eq!(e.to_string(), "matrix size mismatch: 2x2 vs 3x3");
    let e = a().divide(0.0).unwrap_err();
    assert_eq!(e.to_string(), "division by zero");
}
