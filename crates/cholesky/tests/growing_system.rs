//! Grows a synthetic triangular system in batches and checks the recovered solution against
//! the one used to manufacture the right-hand sides.

use approx::assert_relative_eq;
use cholesky::IncrementalSolution;
use nalgebra::{DMatrix, DVector};

/// Well-conditioned lower-triangular factor with a deterministic fill pattern.
fn lower_factor(side: usize) -> DMatrix<f64> {
    DMatrix::from_fn(side, side, |i, j| {
        if i == j {
            2.0 + 0.5 * i as f64
        } else if j < i {
            0.3 + 0.1 * ((i * 7 + j * 3) % 5) as f64
        } else {
            0.0
        }
    })
}

#[test]
fn batched_growth_recovers_manufactured_solution() {
    let full = lower_factor(9);
    let x_true = DMatrix::from_fn(9, 2, |i, j| 1.0 + 0.25 * i as f64 - 0.5 * j as f64);
    let rhs = &full * &x_true;

    let mut inc = IncrementalSolution::new(
        full.view((0, 0), (4, 4)).clone_owned(),
        &rhs.rows(0, 4).clone_owned(),
    )
    .unwrap();

    for (start, len) in [(4usize, 3usize), (7, 2)] {
        let side = start + len;
        let l_new = full.view((0, 0), (side, side)).clone_owned();
        let z = rhs.rows(start, len).clone_owned();
        inc.extend(l_new, &z).unwrap();
        assert_eq!(inc.len(), side);
    }

    assert_relative_eq!(*inc.solution(), x_true, epsilon = 1.0e-8);
    assert_relative_eq!(inc.factor() * inc.solution(), rhs, epsilon = 1.0e-8);
}

#[test]
fn vector_entry_point_matches_full_solution() {
    let full = lower_factor(6);
    let x_true = DVector::from_fn(6, |i, _| 0.5 + 0.2 * i as f64);
    let rhs = &full * &x_true;

    // For a lower-triangular factor the leading rows of the solution depend only on the
    // leading rows of the right-hand side, so the first 4 entries of x_true solve the
    // leading 4x4 system.
    let x = x_true.rows(0, 4).clone_owned();
    let z = rhs.rows(4, 2).clone_owned();
    let x_new = cholesky::extend_solution_vector(&x, &full, &z).unwrap();

    assert_relative_eq!(x_new, x_true, epsilon = 1.0e-10);
}
