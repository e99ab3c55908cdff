//! Key-wrap primitives for the keywrap library
//!
//! This crate holds the two layers below the cipher session:
//!
//! - [`block`]: the AES block cipher adapter, a keyed single-block
//!   encrypt/decrypt over the `aes` crate
//! - [`wrap`]: the KW (RFC 3394) and KWP (RFC 5649) transforms driving it
//!
//! Unwrapping works on a zeroizing scratch copy and only copies plaintext
//! out after the integrity check has passed.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher adapter
pub mod block;
pub use block::{Aes128, Aes192, Aes256, AesKek, BlockTransform};

// Key-wrap transforms
pub mod wrap;
pub use wrap::{KeyWrapAlgorithm, Kw, Kwp};
