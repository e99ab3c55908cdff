//! Error handling for the key-wrap primitives

use std::fmt;

use keywrap_api::Error as CoreError;

/// The error type for key-wrap primitives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Input length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key length does not select a supported AES variant
    KeyLength {
        /// Context where the key was rejected
        context: &'static str,
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Output buffer is smaller than the operation needs
    Buffer {
        /// Context where the buffer was rejected
        context: &'static str,
        /// Bytes the operation will write
        required: usize,
        /// Bytes the caller supplied
        actual: usize,
    },

    /// Recovered integrity value did not verify
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },
}

/// Result type for key-wrap primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::KeyLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid key length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Buffer {
                context,
                required,
                actual,
            } => {
                write!(
                    f,
                    "Output buffer too small for {}: need {}, got {}",
                    context, required, actual
                )
            }
            Error::Authentication { algorithm } => {
                write!(f, "Integrity check failed for {}", algorithm)
            }
        }
    }
}

impl std::error::Error for Error {}

// Lift primitive failures into the public taxonomy
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidInputLength {
                context,
                expected,
                actual,
            },
            Error::KeyLength {
                context,
                expected,
                actual,
            } => CoreError::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Error::Buffer {
                context,
                required,
                actual,
            } => CoreError::BufferTooSmall {
                context,
                required,
                actual,
            },
            Error::Authentication { algorithm } => {
                CoreError::IntegrityCheckFailed { context: algorithm }
            }
        }
    }
}

// Include the validation submodule
pub mod validate;
