mod solve;

pub use solve::{solve_lower_triangular, solve_lower_triangular_in_place};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "A singular triangular matrix was encountered during forward substitution (col {col})"
    )]
    Singular { col: usize },
}
