//! Error type definitions for key-wrapping operations

use thiserror::Error as ThisError;

/// Primary error type for key-wrapping operations
///
/// Every variant is immediately fatal to the call that produced it. No
/// operation returning one of these has written any output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key bytes do not match the variant's fixed key size
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Zero-length input, a length that is not a multiple of 8 where one is
    /// required, unwrap input shorter than 16 bytes, or input over the limit
    #[error("{context}: invalid input length (expected {expected}, got {actual})")]
    InvalidInputLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Output capacity is below the queried size
    #[error("{context}: output buffer too small (required {required}, got {actual})")]
    BufferTooSmall {
        context: &'static str,
        required: usize,
        actual: usize,
    },

    /// Recovered IV, MLI or padding did not verify on unwrap
    #[error("{context}: integrity check failed")]
    IntegrityCheckFailed { context: &'static str },

    /// A parameter update conflicts with the variant's fixed configuration
    #[error("{context}: parameter rejected: {reason}")]
    ParameterRejected {
        context: &'static str,
        reason: &'static str,
    },

    /// IV bytes of the wrong size for the variant
    #[error("{context}: invalid IV length (expected {expected}, got {actual})")]
    InvalidIvLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Lifecycle violation, such as processing before a key is set
    #[error("{context}: invalid state: {reason}")]
    InvalidState {
        context: &'static str,
        reason: &'static str,
    },
}

/// Result type for key-wrapping operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKeyLength {
                expected, actual, ..
            } => Self::InvalidKeyLength {
                context,
                expected,
                actual,
            },
            Self::InvalidInputLength {
                expected, actual, ..
            } => Self::InvalidInputLength {
                context,
                expected,
                actual,
            },
            Self::BufferTooSmall {
                required, actual, ..
            } => Self::BufferTooSmall {
                context,
                required,
                actual,
            },
            Self::IntegrityCheckFailed { .. } => Self::IntegrityCheckFailed { context },
            Self::ParameterRejected { reason, .. } => Self::ParameterRejected { context, reason },
            Self::InvalidIvLength {
                expected, actual, ..
            } => Self::InvalidIvLength {
                context,
                expected,
                actual,
            },
            Self::InvalidState { reason, .. } => Self::InvalidState { context, reason },
        }
    }

    /// The context string attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKeyLength { context, .. }
            | Self::InvalidInputLength { context, .. }
            | Self::BufferTooSmall { context, .. }
            | Self::IntegrityCheckFailed { context }
            | Self::ParameterRejected { context, .. }
            | Self::InvalidIvLength { context, .. }
            | Self::InvalidState { context, .. } => context,
        }
    }

    /// Whether this error reports a failed unwrap integrity check
    pub fn is_integrity_failure(&self) -> bool {
        matches!(self, Self::IntegrityCheckFailed { .. })
    }
}
