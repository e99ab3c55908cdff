//! Public API types for the keywrap library
//!
//! This crate provides the error taxonomy shared by every layer of the
//! key-wrapping engine, the validation guards used at the session boundary,
//! and the zeroizing byte containers that carry key material.

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;
