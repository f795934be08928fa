//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Error in the underlying field arithmetic.
    Field(smallfield::Error),

    /// Coordinates do not satisfy the curve equation.
    NotOnCurve {
        /// x-coordinate
        x: i64,

        /// y-coordinate
        y: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Field(err) => write!(f, "field error: {err}"),
            Error::NotOnCurve { x, y } => write!(f, "point ({x},{y}) is not on the curve"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::Field(err) => Some(err),
            Error::NotOnCurve { .. } => None,
        }
    }
}

impl From<smallfield::Error> for Error {
    fn from(err: smallfield::Error) -> Error {
        Error::Field(err)
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
