//! Variant registry
//!
//! A static table of the six AES wrap configurations replaces one hand-written
//! registration per (key size, padding) pair. [`register_all`] feeds the table
//! to whatever dispatch layer implements [`CipherRegistrar`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use keywrap_api::{Direction, SecretVec};
use keywrap_params::wrap::{KWP_IV_LEN, KW_IV_LEN, SEMIBLOCK_SIZE, WRAP_BLOCK_BITS};
use tracing::debug;

use super::params::{AlgorithmParams, CipherMode};
use super::session::WrapSession;
use crate::cipher::CipherContext;
use crate::error::Result;

/// Capability flags a variant advertises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CipherFlags {
    /// Accepts an IV other than the standard default
    pub custom_iv: bool,
    /// Implements its own cipher loop instead of a generic block mode
    pub custom_cipher: bool,
    /// The host must call init on every use, even to change only the IV
    pub always_call_init: bool,
    /// Supports incremental processing of partial messages
    pub streaming: bool,
}

/// Flags shared by every wrap variant
pub const WRAP_FLAGS: CipherFlags = CipherFlags {
    custom_iv: true,
    custom_cipher: true,
    always_call_init: true,
    streaming: false,
};

/// One registered wrap configuration
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WrapVariant {
    /// Canonical name, e.g. `AES-128-WRAP-PAD`
    pub name: &'static str,
    /// Alternative names accepted by [`find`]
    pub aliases: &'static [&'static str],
    /// ASN.1 object identifier in dotted form
    pub oid: &'static str,
    /// KEK size in bits
    pub key_bits: usize,
    /// Caller-visible IV length in bytes; 4 selects KWP, 8 selects KW
    pub iv_len: usize,
    /// Capability flags
    pub flags: CipherFlags,
}

/// The six AES wrap variants
pub static VARIANTS: [WrapVariant; 6] = [
    WrapVariant {
        name: "AES-128-WRAP",
        aliases: &["id-aes128-wrap", "AES128-WRAP"],
        oid: "2.16.840.1.101.3.4.1.5",
        key_bits: 128,
        iv_len: KW_IV_LEN,
        flags: WRAP_FLAGS,
    },
    WrapVariant {
        name: "AES-192-WRAP",
        aliases: &["id-aes192-wrap", "AES192-WRAP"],
        oid: "2.16.840.1.101.3.4.1.25",
        key_bits: 192,
        iv_len: KW_IV_LEN,
        flags: WRAP_FLAGS,
    },
    WrapVariant {
        name: "AES-256-WRAP",
        aliases: &["id-aes256-wrap", "AES256-WRAP"],
        oid: "2.16.840.1.101.3.4.1.45",
        key_bits: 256,
        iv_len: KW_IV_LEN,
        flags: WRAP_FLAGS,
    },
    WrapVariant {
        name: "AES-128-WRAP-PAD",
        aliases: &["id-aes128-wrap-pad", "AES128-WRAP-PAD"],
        oid: "2.16.840.1.101.3.4.1.8",
        key_bits: 128,
        iv_len: KWP_IV_LEN,
        flags: WRAP_FLAGS,
    },
    WrapVariant {
        name: "AES-192-WRAP-PAD",
        aliases: &["id-aes192-wrap-pad", "AES192-WRAP-PAD"],
        oid: "2.16.840.1.101.3.4.1.28",
        key_bits: 192,
        iv_len: KWP_IV_LEN,
        flags: WRAP_FLAGS,
    },
    WrapVariant {
        name: "AES-256-WRAP-PAD",
        aliases: &["id-aes256-wrap-pad", "AES256-WRAP-PAD"],
        oid: "2.16.840.1.101.3.4.1.48",
        key_bits: 256,
        iv_len: KWP_IV_LEN,
        flags: WRAP_FLAGS,
    },
];

impl WrapVariant {
    /// KEK size in bytes
    pub fn key_len(&self) -> usize {
        self.key_bits / 8
    }

    /// Whether this is a KWP variant
    pub fn padding(&self) -> bool {
        self.iv_len == KWP_IV_LEN
    }

    /// Advertised block size in bits
    pub fn block_bits(&self) -> usize {
        WRAP_BLOCK_BITS
    }

    /// Case-insensitive match against the name, an alias or the OID
    pub fn matches(&self, id: &str) -> bool {
        self.name.eq_ignore_ascii_case(id)
            || self.oid == id
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(id))
    }

    /// Fixed parameters advertised to the host
    pub fn algorithm_params(&self) -> AlgorithmParams {
        AlgorithmParams {
            mode: CipherMode::Wrap,
            key_len: self.key_len(),
            iv_len: self.iv_len,
            block_size: SEMIBLOCK_SIZE,
            flags: self.flags,
        }
    }

    /// Create an uninitialized session for `direction`
    pub fn new_session(&'static self, direction: Direction) -> WrapSession {
        WrapSession::new(self, direction)
    }

    /// Wrap `key` under `kek` in one call
    pub fn wrap_key(&'static self, kek: &[u8], iv: Option<&[u8]>, key: &[u8]) -> Result<Vec<u8>> {
        let mut session = self.new_session(Direction::Encrypt);
        session.encrypt_init(Some(kek), iv)?;

        let mut out = vec![0u8; session.output_size(key.len())?];
        let written = session.process(key, &mut out)?;
        session.finalize(&mut [])?;
        out.truncate(written);
        Ok(out)
    }

    /// Unwrap `wrapped` under `kek` in one call
    ///
    /// The result is truncated to the recovered length on KWP variants.
    pub fn unwrap_key(
        &'static self,
        kek: &[u8],
        iv: Option<&[u8]>,
        wrapped: &[u8],
    ) -> Result<SecretVec> {
        let mut session = self.new_session(Direction::Decrypt);
        session.decrypt_init(Some(kek), iv)?;

        let mut out = SecretVec::zeroed(session.output_size(wrapped.len())?);
        let written = session.process(wrapped, out.as_mut())?;
        session.finalize(&mut [])?;
        out.truncate(written);
        Ok(out)
    }
}

/// Look up a variant by name, alias or OID
pub fn find(id: &str) -> Option<&'static WrapVariant> {
    VARIANTS.iter().find(|v| v.matches(id))
}

/// Look up a variant by KEK size in bits and padding mode
pub fn variant(key_bits: usize, padding: bool) -> Option<&'static WrapVariant> {
    VARIANTS
        .iter()
        .find(|v| v.key_bits == key_bits && v.padding() == padding)
}

/// The host dispatch boundary
pub trait CipherRegistrar {
    /// Error returned by the host when a registration is refused
    type Error;

    /// Expose one variant under its identifiers
    fn register(
        &mut self,
        variant: &'static WrapVariant,
    ) -> core::result::Result<(), Self::Error>;
}

/// Register every variant, returning how many were registered
///
/// Stops at the first registrar error.
pub fn register_all<R: CipherRegistrar>(
    registrar: &mut R,
) -> core::result::Result<usize, R::Error> {
    let mut count = 0;
    for v in VARIANTS.iter() {
        registrar.register(v)?;
        debug!(
            name = v.name,
            oid = v.oid,
            key_bits = v.key_bits,
            padding = v.padding(),
            "registered wrap variant"
        );
        count += 1;
    }
    Ok(count)
}
