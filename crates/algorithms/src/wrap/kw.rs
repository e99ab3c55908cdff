//! RFC 3394 key wrap

use keywrap_internal::constant_time::ct_eq;
use keywrap_params::wrap::{
    KW_DEFAULT_IV, KW_IV_LEN, MAX_INPUT_LEN, MIN_WRAPPED_LEN, SEMIBLOCK_SIZE,
};
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

use super::{unwrap_in_place, wrap_in_place, KeyWrapAlgorithm};
use crate::block::BlockTransform;
use crate::error::{validate, Result};

fn check_input(context: &'static str, len: usize) -> Result<()> {
    validate::min_length(context, len, SEMIBLOCK_SIZE)?;
    validate::multiple_of(context, len, SEMIBLOCK_SIZE)?;
    validate::max_length(context, len, MAX_INPUT_LEN - 1)
}

/// KW output length for `input_len` plaintext bytes
pub fn wrapped_len(input_len: usize) -> Result<usize> {
    check_input("KW plaintext", input_len)?;
    Ok(input_len + SEMIBLOCK_SIZE)
}

/// KW output length for `input_len` ciphertext bytes
pub fn unwrapped_len(input_len: usize) -> Result<usize> {
    check_input("KW ciphertext", input_len)?;
    validate::min_length("KW ciphertext", input_len, MIN_WRAPPED_LEN)?;
    Ok(input_len - SEMIBLOCK_SIZE)
}

/// KW: key wrap without padding
///
/// Inputs must be a positive multiple of 8 bytes. An 8-byte input is wrapped
/// with a single block cipher call.
pub struct Kw<B: BlockTransform> {
    cipher: B,
    iv: [u8; KW_IV_LEN],
}

impl<B: BlockTransform> Kw<B> {
    /// Create a KW transform using the default initial value `A6A6A6A6A6A6A6A6`
    pub fn new(cipher: B) -> Self {
        Self {
            cipher,
            iv: KW_DEFAULT_IV,
        }
    }

    /// Create a KW transform with a caller-chosen 8-byte initial value
    pub fn with_iv(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("KW initial value", iv.len(), KW_IV_LEN)?;
        let mut kw = Self::new(cipher);
        kw.iv.copy_from_slice(iv);
        Ok(kw)
    }
}

impl<B: BlockTransform> KeyWrapAlgorithm for Kw<B> {
    fn name(&self) -> &'static str {
        "KW"
    }

    fn wrapped_len(&self, input_len: usize) -> Result<usize> {
        wrapped_len(input_len)
    }

    fn unwrapped_len(&self, input_len: usize) -> Result<usize> {
        unwrapped_len(input_len)
    }

    fn wrap_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let out_len = self.wrapped_len(input.len())?;
        validate::buffer("KW output", output.len(), out_len)?;

        let out = &mut output[..out_len];
        out[..SEMIBLOCK_SIZE].copy_from_slice(&self.iv);
        out[SEMIBLOCK_SIZE..].copy_from_slice(input);
        wrap_in_place(&self.cipher, out)?;
        Ok(out_len)
    }

    fn unwrap_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let out_len = self.unwrapped_len(input.len())?;
        validate::buffer("KW output", output.len(), out_len)?;

        let mut scratch = Zeroizing::new(input.to_vec());
        unwrap_in_place(&self.cipher, &mut scratch)?;

        let valid = ct_eq(&scratch[..SEMIBLOCK_SIZE], self.iv);
        if !valid {
            warn!(len = input.len(), "KW integrity check failed");
        }
        validate::authentication(valid, "KW")?;

        output[..out_len].copy_from_slice(&scratch[SEMIBLOCK_SIZE..]);
        Ok(out_len)
    }
}

impl<B: BlockTransform> Drop for Kw<B> {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}
