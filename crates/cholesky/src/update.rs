//! Block-triangular update of a solved system when the factor grows.

use nalgebra::{
    allocator::Allocator, DMatrix, DVector, DefaultAllocator, Dim, Dyn, Matrix, OMatrix,
    RealField, Scalar, Storage, Vector, U1,
};

use crate::Error;

/// Extends the solution of `L * x = y` to the solution of `L_new * x_new = (y; z)`.
///
/// `L_new` is an (n+m) x (n+m) lower-triangular factor whose leading n x n block equals the
/// factor `L` that produced `x`. Writing it in block form,
///
/// ```text
/// L_new = [ L    0   ]        x_new = [ x   ]
///         [ D21  D22 ]                [ x_u ]
/// ```
///
/// the appended rows of the solution satisfy the m x m triangular system
/// `D22 * x_u = z - D21 * x`, so the update costs one matrix product and one forward
/// substitution instead of a full (n+m) x (n+m) solve.
///
/// `x` and `z` are matrices whose columns are independent right-hand sides and must have the
/// same column count; for a single right-hand side see [`extend_solution_vector`]. Entries of
/// `l_new` strictly above the diagonal are never read. No input is mutated and the result is
/// freshly allocated.
///
/// The equality of the leading block of `l_new` with the original factor cannot be checked
/// from the arguments alone; it is the caller's obligation. [`IncrementalSolution`], which
/// keeps the previous factor, enforces it on every step.
///
/// # Errors
///
/// All shape preconditions are checked before any arithmetic:
/// * [`Error::FactorNotSquare`] if `l_new` is not square,
/// * [`Error::ColumnMismatch`] if `x` and `z` column counts differ,
/// * [`Error::SizeMismatch`] if the side of `l_new` is not `x.nrows() + z.nrows()`.
///
/// A zero diagonal entry in the appended block surfaces unmodified as [`Error::Singular`];
/// it indicates a rank-deficient factor update and is never recovered here.
///
/// [`IncrementalSolution`]: crate::IncrementalSolution
pub fn extend_solution<T, SX, SL, SZ>(
    x: &Matrix<T, Dyn, Dyn, SX>,
    l_new: &Matrix<T, Dyn, Dyn, SL>,
    z: &Matrix<T, Dyn, Dyn, SZ>,
) -> Result<DMatrix<T>, Error>
where
    T: Scalar + RealField + Copy,
    SX: Storage<T, Dyn, Dyn>,
    SL: Storage<T, Dyn, Dyn>,
    SZ: Storage<T, Dyn, Dyn>,
{
    extend_columns(x, l_new, z)
}

/// Single right-hand-side form of [`extend_solution`].
///
/// Takes and returns column vectors; the result has length `x.nrows() + z.nrows()`.
pub fn extend_solution_vector<T, SX, SL, SZ>(
    x: &Vector<T, Dyn, SX>,
    l_new: &Matrix<T, Dyn, Dyn, SL>,
    z: &Vector<T, Dyn, SZ>,
) -> Result<DVector<T>, Error>
where
    T: Scalar + RealField + Copy,
    SX: Storage<T, Dyn, U1>,
    SL: Storage<T, Dyn, Dyn>,
    SZ: Storage<T, Dyn, U1>,
{
    extend_columns(x, l_new, z)
}

/// Shared implementation, generic over the right-hand-side column dimension.
fn extend_columns<T, C, SX, SL, SZ>(
    x: &Matrix<T, Dyn, C, SX>,
    l_new: &Matrix<T, Dyn, Dyn, SL>,
    z: &Matrix<T, Dyn, C, SZ>,
) -> Result<OMatrix<T, Dyn, C>, Error>
where
    T: Scalar + RealField + Copy,
    C: Dim,
    SX: Storage<T, Dyn, C>,
    SL: Storage<T, Dyn, Dyn>,
    SZ: Storage<T, Dyn, C>,
    DefaultAllocator: Allocator<T, Dyn, C>,
{
    if l_new.nrows() != l_new.ncols() {
        return Err(Error::FactorNotSquare {
            nrows: l_new.nrows(),
            ncols: l_new.ncols(),
        });
    }
    if x.ncols() != z.ncols() {
        return Err(Error::ColumnMismatch {
            x_cols: x.ncols(),
            z_cols: z.ncols(),
        });
    }
    let n = x.nrows();
    let m = z.nrows();
    if l_new.nrows() != n + m {
        return Err(Error::SizeMismatch {
            side: l_new.nrows(),
            expected: n + m,
        });
    }

    let d21 = l_new.view((n, 0), (m, n));
    let d22 = l_new.view((n, n), (m, m));

    // x_u solves D22 * x_u = z - D21 * x
    let mut x_u = z.clone_owned();
    x_u.gemm(-T::one(), &d21, x, T::one());
    triangular::solve_lower_triangular_in_place(&d22, &mut x_u)?;

    let (_, ncols) = x.shape_generic();
    let mut x_new = OMatrix::<T, Dyn, C>::zeros_generic(Dyn(n + m), ncols);
    x_new.rows_mut(0, n).copy_from(x);
    x_new.rows_mut(n, m).copy_from(&x_u);
    Ok(x_new)
}
