//! Key-wrap cipher sessions for the keywrap library
//!
//! This crate provides the stateful layer above the KW / KWP transforms in
//! keywrap-algorithms: a [`WrapSession`] with an init → process → finalize
//! lifecycle and a two-phase size query, and the static registry of the six
//! AES wrap variants that hosts dispatch on.

#![forbid(unsafe_code)]

pub mod cipher;
pub mod error;
pub mod wrap;

// Re-export main types for convenience
pub use cipher::CipherContext;
pub use wrap::{
    find, register_all, variant, AlgorithmParams, CipherFlags, CipherMode, CipherRegistrar,
    ContextParams, ContextParamsUpdate, SessionState, WrapSession, WrapVariant, VARIANTS,
};

// Re-export the API error system instead of custom error types
pub use keywrap_api::error::{validate, Error, Result};
pub use keywrap_api::Direction;
