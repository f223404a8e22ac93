//! Arbitrary precision decimal arithmetic.
//!
//! Precision is carried by an explicit [`PrecisionContext`]; there is no
//! process-wide precision setting. Values are built from exact integers only.

pub mod context;
pub mod decimal;
pub mod render;

pub use context::{GUARD_DIGITS, PrecisionContext};
pub use decimal::Decimal;
pub use render::format_significant;

use crate::domain::ShellConstError;

pub type NumericResult<T> = Result<T, NumericError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum NumericError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of a negative value")]
    NegativeSquareRoot,
    #[error("precision must be at least one significant digit")]
    ZeroPrecision,
}

impl From<NumericError> for ShellConstError {
    fn from(error: NumericError) -> Self {
        match error {
            NumericError::ZeroPrecision => {
                ShellConstError::usage("INPUT.PRECISION", error.to_string())
            }
            NumericError::DivisionByZero | NumericError::NegativeSquareRoot => {
                ShellConstError::numeric("RUN.NUMERIC", error.to_string())
            }
        }
    }
}
