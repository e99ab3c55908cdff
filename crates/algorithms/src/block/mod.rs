//! Block cipher adapter
//!
//! The key-wrap transforms only ever need a keyed, single-block
//! encrypt/decrypt capability. [`BlockTransform`] is that capability as an
//! object-safe trait, implemented by the AES types in [`aes`].

use crate::error::Result;

pub mod aes;

// Re-exports
pub use self::aes::{Aes128, Aes192, Aes256, AesKek};

/// A keyed single-block permutation
pub trait BlockTransform {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}

impl<T: BlockTransform + ?Sized> BlockTransform for &T {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        (**self).decrypt_block(block)
    }
}
