extern crate dmat;
extern crate rand;

use dmat::matrix::*;
use dmat::*;

use rand::Rng;

fn main() {
    io_main().expect("main failed");
}

// Smoke scenario: a random matrix times its inverse should print as the
// identity once display rounding absorbs the elimination drift.
fn io_main() -> Result<(), MatrixError> {
    let size = 100;
    let mut rng = rand::thread_rng();

    let mut rows = Vec::with_capacity(size);
    for _ in 0..size {
        rows.push((0..size).map(|_| rng.gen_range(0..100) as f64).collect());
    }

    let a = Matrix::from_rows(rows)?;
    let product = a.mul(a.inverse()?)?;
    print!("{}", format_matrix(&product, 6));
    Ok(())
}
