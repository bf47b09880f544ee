//! Stateful driver that carries the factor and solution across update batches.

use nalgebra::{DMatrix, RealField, Scalar};

use crate::{update, Error};

/// Holds the current lower-triangular factor `L` together with the solution of `L * x = y`,
/// and grows both as new batches of rows arrive.
///
/// The free functions in [`update`] leave the agreement between the leading block of the
/// extended factor and the previous factor as a caller obligation; this wrapper keeps the
/// previous factor, so it checks that agreement on every [`extend`](IncrementalSolution::extend)
/// and rejects inconsistent factors before touching the stored state.
#[derive(Clone, Debug)]
pub struct IncrementalSolution<T: Scalar> {
    /// current lower-triangular factor, side n
    factor: DMatrix<T>,
    /// solution of `factor * solution = rhs` for the right-hand sides seen so far, n x k
    solution: DMatrix<T>,
}

impl<T> IncrementalSolution<T>
where
    T: Scalar + RealField + Copy,
{
    /// Solves the initial system `factor * x = rhs` by forward substitution and stores the
    /// pair. The columns of `rhs` are independent right-hand sides.
    ///
    /// # Errors
    /// Shape errors if `factor` is not square or its side differs from the row count of
    /// `rhs`; [`Error::Singular`] if `factor` has a zero diagonal entry.
    pub fn new(factor: DMatrix<T>, rhs: &DMatrix<T>) -> Result<Self, Error> {
        if factor.nrows() != factor.ncols() {
            return Err(Error::FactorNotSquare {
                nrows: factor.nrows(),
                ncols: factor.ncols(),
            });
        }
        if factor.nrows() != rhs.nrows() {
            return Err(Error::RhsRowMismatch {
                side: factor.nrows(),
                rows: rhs.nrows(),
            });
        }
        let solution = triangular::solve_lower_triangular(&factor, rhs)?;
        Ok(IncrementalSolution { factor, solution })
    }

    /// Extends the stored solution to the system `l_new * x_new = (y; z)`, where `y` is the
    /// stacked right-hand sides of all previous batches.
    ///
    /// `l_new` must be square with side `self.len() + z.nrows()`, and its leading block must
    /// equal the stored factor. On success the stored factor and solution are replaced and a
    /// reference to the new solution is returned; on error the stored state is untouched.
    pub fn extend(&mut self, l_new: DMatrix<T>, z: &DMatrix<T>) -> Result<&DMatrix<T>, Error> {
        let n = self.factor.nrows();
        let m = z.nrows();
        log::trace!("IncrementalSolution::extend n={} m={}", n, m);

        if l_new.nrows() != l_new.ncols() {
            return Err(Error::FactorNotSquare {
                nrows: l_new.nrows(),
                ncols: l_new.ncols(),
            });
        }
        if l_new.nrows() != n + m {
            return Err(Error::SizeMismatch {
                side: l_new.nrows(),
                expected: n + m,
            });
        }
        if l_new.view((0, 0), (n, n)) != self.factor {
            return Err(Error::LeadingBlockMismatch);
        }

        let solution = update::extend_solution(&self.solution, &l_new, z)?;
        self.factor = l_new;
        self.solution = solution;
        Ok(&self.solution)
    }

    /// The current factor.
    pub fn factor(&self) -> &DMatrix<T> {
        &self.factor
    }

    /// The current solution.
    pub fn solution(&self) -> &DMatrix<T> {
        &self.solution
    }

    /// Number of solved rows.
    pub fn len(&self) -> usize {
        self.solution.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
