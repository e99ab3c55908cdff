//! Error handling for key-wrap sessions
//!
//! Sessions report through the API error system; primitive failures are
//! lifted into it with [`SymmetricResultExt`].

// Re-export the primary API error system
pub use keywrap_api::error::{validate, Error, Result};

// Import for conversions
use keywrap_algorithms::error::Error as PrimitiveError;

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert and replace the error context with `context`
    fn map_primitive_err_with(self, context: &'static str) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err_with(self, context: &'static str) -> Result<T> {
        self.map_err(|e| Error::from(e).with_context(context))
    }
}

/// Validate session state with consistent context
pub fn validate_session_state(
    condition: bool,
    operation: &'static str,
    details: &'static str,
) -> Result<()> {
    validate::state(condition, operation, details)
}
