//! Error types.

use core::fmt;

/// Error type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Modulus is too small to define a field (must be at least 2).
    InvalidModulus(i64),

    /// Element has no multiplicative inverse modulo the given modulus.
    NotInvertible {
        /// Element which was inverted.
        value: i64,

        /// Modulus the inversion was attempted under.
        modulus: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidModulus(modulus) => write!(f, "invalid modulus: {modulus}"),
            Error::NotInvertible { value, modulus } => {
                write!(f, "{value} is not invertible modulo {modulus}")
            }
        }
    }
}

impl core::error::Error for Error {}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
