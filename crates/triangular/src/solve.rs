//! Forward substitution for dense lower-triangular matrices.
//!
use nalgebra::{
    allocator::Allocator, DefaultAllocator, Dim, Matrix, OMatrix, RealField, Scalar, Storage,
    StorageMut,
};
use num_traits::Zero;

use crate::Error;

/// Solves `L * y = b` for lower-triangular `L`, overwriting `b` with `y`.
///
/// Each column of `b` is treated as an independent right-hand side and is solved by forward
/// substitution, working column-by-column through `L` so that the innermost update walks down a
/// single (column-major contiguous) column.
///
/// The entries of `L` strictly above the diagonal are never read, so the caller may pass a full
/// square matrix whose upper part holds unrelated data.
///
/// Returns `Err` on the first zero diagonal element. In this case the error carries the column
/// index (numbered from one) at which the zero was encountered, and `b` may have been partially
/// overwritten.
///
/// Panics if `L` is not square or if the row counts of `L` and `b` differ.
pub fn solve_lower_triangular_in_place<T, D, C, SA, SB>(
    mat_l: &Matrix<T, D, D, SA>,
    b: &mut Matrix<T, D, C, SB>,
) -> Result<(), Error>
where
    T: Scalar + RealField + Zero + Copy,
    D: Dim,
    C: Dim,
    SA: Storage<T, D, D>,
    SB: StorageMut<T, D, C>,
{
    assert_eq!(mat_l.nrows(), mat_l.ncols(), "Matrix must be square");
    assert_eq!(
        mat_l.nrows(),
        b.nrows(),
        "Row counts of matrix and right-hand side must agree"
    );

    let n = mat_l.nrows();

    for j in 0..b.ncols() {
        // Solve L y = b_j, store solution y in b_j
        for k in 0..n {
            let col_k = mat_l.column(k);
            if col_k[k].is_zero() {
                return Err(Error::Singular { col: k + 1 });
            }
            b[(k, j)] /= col_k[k];
            let bk = b[(k, j)];
            for i in (k + 1)..n {
                b[(i, j)] -= col_k[i] * bk;
            }
        }
    }

    Ok(())
}

/// Solves `L * y = b` for lower-triangular `L`, returning `y` in a fresh allocation.
///
/// Allocating form of [`solve_lower_triangular_in_place`]; `b` is left untouched.
pub fn solve_lower_triangular<T, D, C, SA, SB>(
    mat_l: &Matrix<T, D, D, SA>,
    b: &Matrix<T, D, C, SB>,
) -> Result<OMatrix<T, D, C>, Error>
where
    T: Scalar + RealField + Zero + Copy,
    D: Dim,
    C: Dim,
    SA: Storage<T, D, D>,
    SB: Storage<T, D, C>,
    DefaultAllocator: Allocator<T, D, C>,
{
    let mut y = b.clone_owned();
    solve_lower_triangular_in_place(mat_l, &mut y)?;
    Ok(y)
}
