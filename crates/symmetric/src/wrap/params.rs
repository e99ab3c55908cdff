//! Parameter surface of the wrap ciphers
//!
//! With the `serde` feature these structs serialize so a host can export
//! them or accept updates as configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::registry::CipherFlags;

/// Cipher mode reported by [`AlgorithmParams`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CipherMode {
    /// Key wrap, with or without padding
    Wrap,
}

/// Fixed parameters a variant advertises to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlgorithmParams {
    /// Always [`CipherMode::Wrap`]
    pub mode: CipherMode,
    /// Key length in bytes
    pub key_len: usize,
    /// Caller-visible IV length in bytes
    pub iv_len: usize,
    /// Block size in bytes, the 8-byte semiblock
    pub block_size: usize,
    /// Capability flags
    pub flags: CipherFlags,
}

/// Parameters of one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextParams {
    /// Key length in bytes
    pub key_len: usize,
    /// Caller-visible IV length in bytes
    pub iv_len: usize,
    /// Whether the session uses KWP
    pub padding: bool,
    /// Whether a caller IV replaced the default
    pub iv_set: bool,
}

/// A parameter update; absent fields are left alone
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContextParamsUpdate {
    /// Requested key length in bytes; must equal the variant's
    pub key_len: Option<usize>,
}

impl ContextParamsUpdate {
    /// An update requesting `key_len`
    pub fn key_len(key_len: usize) -> Self {
        Self {
            key_len: Some(key_len),
        }
    }
}
