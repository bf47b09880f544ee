//! Solves a small lower-triangular system, then grows it two rows at a time, printing the
//! solution after each batch.

use cholesky::IncrementalSolution;
use nalgebra::DMatrix;

fn main() {
    let full = DMatrix::from_fn(8, 8, |i, j| {
        if i == j {
            2.0 + 0.5 * i as f64
        } else if j < i {
            0.3 + 0.1 * ((i * 7 + j * 3) % 5) as f64
        } else {
            0.0
        }
    });
    let x_true = DMatrix::from_fn(8, 1, |i, _| 1.0 + i as f64);
    let rhs = &full * &x_true;

    let mut inc = IncrementalSolution::new(
        full.view((0, 0), (4, 4)).clone_owned(),
        &rhs.rows(0, 4).clone_owned(),
    )
    .expect("initial solve");
    println!("solved {} rows: {}", inc.len(), inc.solution().transpose());

    for start in (4..8).step_by(2) {
        let side = start + 2;
        inc.extend(
            full.view((0, 0), (side, side)).clone_owned(),
            &rhs.rows(start, 2).clone_owned(),
        )
        .expect("extend");
        println!("extended to {} rows: {}", inc.len(), inc.solution().transpose());
    }
}
