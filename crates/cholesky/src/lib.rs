//! Incremental updates to the solution of a lower-triangular linear system whose factor grows
//! by appended rows and columns, as in sequential Cholesky-based algorithms (online
//! Gaussian-process updates, sequential least squares).
//!
//! Given the solution `x` of `L * x = y` and an extended factor `L_new` whose leading block
//! equals `L`, [`extend_solution`] computes the solution of the extended system without
//! re-solving the part already done. [`IncrementalSolution`] carries the factor and solution
//! across batches for callers that grow a system repeatedly.

use thiserror::Error;

pub mod incremental;
pub mod update;

pub use incremental::IncrementalSolution;
pub use update::{extend_solution, extend_solution_vector};

#[derive(Debug, Error)]
pub enum Error {
    /// The extended factor is not a square matrix.
    #[error("extended factor must be square, got {nrows} x {ncols}")]
    FactorNotSquare { nrows: usize, ncols: usize },

    /// The right-hand-side blocks carry different numbers of columns.
    #[error("right-hand-side column counts differ (x has {x_cols}, z has {z_cols})")]
    ColumnMismatch { x_cols: usize, z_cols: usize },

    /// The side of the factor does not match the stacked row count of the inputs.
    #[error("extended factor size inconsistent with inputs (side {side}, expected {expected})")]
    SizeMismatch { side: usize, expected: usize },

    /// The side of the initial factor does not match the row count of the right-hand side.
    #[error("factor side {side} does not match right-hand-side row count {rows}")]
    RhsRowMismatch { side: usize, rows: usize },

    /// The leading block of the extended factor differs from the previous factor.
    #[error("leading block of the extended factor differs from the previous factor")]
    LeadingBlockMismatch,

    /// The appended diagonal block of the factor is singular.
    #[error(transparent)]
    Singular(#[from] triangular::Error),
}
