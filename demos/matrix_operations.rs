//! Print the results of the matrix operators.
//!
//! With no arguments, uses the built-in matrices
//! A = [[1, 2], [3, 4]] and B = [[5, 6], [7, 8]].
//! Otherwise, each argument is a path to a YAML file
//! of the form:
//!
//! ```yaml
//! a: [[1, 2], [3, 4]]
//! b: [[5, 6], [7, 8]]
//! ```

use anyhow::Result;
use serde::Deserialize;
use squaremat::SquareMatrix;

#[derive(Deserialize)]
struct Operands {
    a: SquareMatrix,
    b: SquareMatrix,
}

fn load_operands(path: &str) -> Result<Operands> {
    let file = std::fs::File::open(path)?;
    let operands = serde_yaml::from_reader(file)?;
    Ok(operands)
}

fn default_operands() -> Result<Operands> {
    println!("Creating 2x2 matrices A and B...");
    let a = SquareMatrix::from_rows(&[[1., 2.], [3., 4.]])?;
    let b = SquareMatrix::from_rows(&[[5., 6.], [7., 8.]])?;
    Ok(Operands { a, b })
}

fn run(operands: Operands) -> Result<()> {
    let Operands { mut a, b } = operands;

    print!("Matrix A:\n{a}");
    print!("Matrix B:\n{b}");

    print!("A + B:\n{}", (&a + &b)?);
    print!("A - B:\n{}", (&a - &b)?);
    print!("-A:\n{}", -&a);

    print!("A * B:\n{}", (&a * &b)?);
    print!("A * 2:\n{}", &a * 2.0);
    print!("A % B (element-wise):\n{}", a.elementwise_mul(&b)?);
    print!("A % 3 (modulo scalar):\n{}", (&a % 3)?);

    print!("A / 2:\n{}", (&a / 2.0)?);

    print!("Transpose of A:\n{}", a.transpose());
    println!("Determinant of A: {}", a.determinant());

    print!("Power: A^2:\n{}", a.power(2)?);

    println!("Incrementing A...");
    a.increment();
    print!("{a}");

    println!("Decrementing A...");
    a.post_decrement();
    print!("{a}");

    println!("Comparison: A == B? {}", a == b);
    println!("Comparison: A != B? {}", a != b);
    println!("Comparison: A > B? {}", a.greater_than(&b));

    println!("Accessing A[0][1]: {}", a.get(0, 1)?);
    a.set(0, 1, 10.0)?;
    print!("Updated A:\n{a}");

    println!("Using compound assignment operators...");
    a.add_into(&b)?.subtract_into(&b)?;
    a *= 2.0;
    a.divide_into(2.0)?.modulo_into(5)?;
    print!("Final A:\n{a}");

    Ok(())
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
}

fn main() {
    let inputs = std::env::args().skip(1).collect::<Vec<_>>();
    if inputs.is_empty() {
        report(default_operands().and_then(run));
    }
    for input in inputs {
        println!("processing file {input}");
        report(load_operands(&input).and_then(run));
    }
}
