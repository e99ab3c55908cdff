//! AES block cipher adapter
//!
//! Binds the `aes` crate's FIPS 197 implementation to [`BlockTransform`].
//! Key schedules are erased on drop through the crate's `zeroize` feature.
//!
//! [`AesKek`] selects AES-128, AES-192 or AES-256 at runtime from the length
//! of the key-encryption key, which is how a wrap session receives its key.

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use keywrap_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_BLOCK_SIZE,
};

use super::BlockTransform;
use crate::error::{validate, Error, Result};

macro_rules! aes_cipher {
    ($name:ident, $inner:ty, $label:literal, $key_size:expr) => {
        #[doc = concat!($label, " block cipher")]
        #[derive(Clone)]
        pub struct $name {
            inner: $inner,
        }

        impl $name {
            /// Expand a key given as a byte slice
            pub fn from_slice(key: &[u8]) -> Result<Self> {
                validate::key_length($label, key.len(), $key_size)?;
                let inner = <$inner>::new_from_slice(key).map_err(|_| Error::KeyLength {
                    context: $label,
                    expected: $key_size,
                    actual: key.len(),
                })?;
                Ok(Self { inner })
            }
        }

        impl BlockTransform for $name {
            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
                BlockEncrypt::encrypt_block(&self.inner, GenericArray::from_mut_slice(block));
                Ok(())
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
                BlockDecrypt::decrypt_block(&self.inner, GenericArray::from_mut_slice(block));
                Ok(())
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}[REDACTED]", $label)
            }
        }
    };
}

aes_cipher!(Aes128, aes::Aes128, "AES-128", AES128_KEY_SIZE);
aes_cipher!(Aes192, aes::Aes192, "AES-192", AES192_KEY_SIZE);
aes_cipher!(Aes256, aes::Aes256, "AES-256", AES256_KEY_SIZE);

/// An AES key schedule whose size is chosen from the key length
#[derive(Clone, Debug)]
pub enum AesKek {
    /// 128-bit key-encryption key
    Aes128(Aes128),
    /// 192-bit key-encryption key
    Aes192(Aes192),
    /// 256-bit key-encryption key
    Aes256(Aes256),
}

impl AesKek {
    /// Expand a 16, 24 or 32 byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        match key.len() {
            AES128_KEY_SIZE => Aes128::from_slice(key).map(AesKek::Aes128),
            AES192_KEY_SIZE => Aes192::from_slice(key).map(AesKek::Aes192),
            AES256_KEY_SIZE => Aes256::from_slice(key).map(AesKek::Aes256),
            actual => Err(Error::KeyLength {
                context: "AES key",
                expected: AES256_KEY_SIZE,
                actual,
            }),
        }
    }

    /// Expand a key that must be exactly `key_len` bytes
    pub fn with_key_len(key: &[u8], key_len: usize) -> Result<Self> {
        validate::key_length("AES key", key.len(), key_len)?;
        Self::new(key)
    }

    /// Key size in bytes
    pub fn key_len(&self) -> usize {
        match self {
            AesKek::Aes128(_) => AES128_KEY_SIZE,
            AesKek::Aes192(_) => AES192_KEY_SIZE,
            AesKek::Aes256(_) => AES256_KEY_SIZE,
        }
    }
}

impl BlockTransform for AesKek {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            AesKek::Aes128(c) => c.encrypt_block(block),
            AesKek::Aes192(c) => c.encrypt_block(block),
            AesKek::Aes256(c) => c.encrypt_block(block),
        }
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        match self {
            AesKek::Aes128(c) => c.decrypt_block(block),
            AesKek::Aes192(c) => c.decrypt_block(block),
            AesKek::Aes256(c) => c.decrypt_block(block),
        }
    }
}
