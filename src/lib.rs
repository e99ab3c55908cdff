//! # keywrap
//!
//! AES key wrapping per NIST SP 800-38F: KW (RFC 3394) and KWP (RFC 5649)
//! for 128, 192 and 256-bit key-encryption keys.
//!
//! ## Usage
//!
//! ```
//! use keywrap::prelude::*;
//!
//! let variant = find("AES-256-WRAP-PAD").unwrap();
//! let kek = [0x42u8; 32];
//!
//! let wrapped = variant.wrap_key(&kek, None, b"secret key material").unwrap();
//! let key = variant.unwrap_key(&kek, None, &wrapped).unwrap();
//! assert_eq!(&key[..], b"secret key material");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for advertised parameters and
//!   variant descriptors
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`keywrap-api`]: error taxonomy, secret containers, `Direction`
//! - [`keywrap-algorithms`]: AES block adapter and the KW / KWP transforms
//! - [`keywrap-symmetric`]: cipher sessions and the variant registry
//! - [`keywrap-params`]: algorithm constants
//! - [`keywrap-internal`]: constant-time and byte-order helpers

pub use keywrap_algorithms as algorithms;
pub use keywrap_api as api;
pub use keywrap_internal as internal;
pub use keywrap_params as params;
pub use keywrap_symmetric as symmetric;

pub use zeroize;

/// Common imports for keywrap users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Direction, Error, Result};

    // Sessions and registry
    pub use crate::symmetric::{
        find, register_all, variant, CipherContext, CipherRegistrar, SessionState, WrapSession,
        WrapVariant,
    };

    // Transforms for callers holding their own key schedule
    pub use crate::algorithms::{AesKek, KeyWrapAlgorithm, Kw, Kwp};

    // Re-export security types
    pub use crate::api::{SecretBytes, SecretVec};
}
