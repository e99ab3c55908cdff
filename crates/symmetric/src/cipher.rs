//! Cipher context trait for keywrap-symmetric
//!
//! The lifecycle a host dispatch layer drives on every cipher it exposes:
//! direction-specific init, a size query, a single data-moving call and a
//! finalize step.

use crate::error::Result;
use crate::wrap::{ContextParams, ContextParamsUpdate};

/// A stateful cipher bound to one key, direction and IV
pub trait CipherContext {
    /// Set key and/or IV for encryption
    ///
    /// Either argument may be omitted. An omitted key keeps the current
    /// schedule. An omitted IV keeps any IV set by an earlier init; the
    /// variant default applies only while no IV has ever been set.
    fn encrypt_init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()>;

    /// Set key and/or IV for decryption
    fn decrypt_init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()>;

    /// Output capacity `process` needs for `input_len` bytes of input
    ///
    /// Performs no cryptographic work and needs no key.
    fn output_size(&self, input_len: usize) -> Result<usize>;

    /// Transform the whole message, returning the bytes written to `output`
    fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Complete the operation, returning the bytes written to `output`
    fn finalize(&mut self, output: &mut [u8]) -> Result<usize>;

    /// Report the per-session parameters
    fn get_params(&self) -> ContextParams;

    /// Apply a parameter update
    fn set_params(&mut self, params: &ContextParamsUpdate) -> Result<()>;
}
