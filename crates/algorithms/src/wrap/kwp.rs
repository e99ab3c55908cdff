//! RFC 5649 key wrap with padding

use keywrap_internal::constant_time::{ct_eq_choice, ct_in_range, ct_is_zero};
use keywrap_internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use keywrap_params::wrap::{
    KWP_ALTERNATE_IV, KWP_IV_LEN, KWP_MLI_LEN, MAX_INPUT_LEN, MIN_WRAPPED_LEN, SEMIBLOCK_SIZE,
};
use subtle::ConditionallySelectable;
use tracing::warn;
use zeroize::{Zeroize, Zeroizing};

use super::{unwrap_in_place, wrap_in_place, KeyWrapAlgorithm};
use crate::block::BlockTransform;
use crate::error::{validate, Result};

/// KWP: key wrap with padding
///
/// The first semiblock is the 4-byte alternative initial value followed by
/// the 32-bit big-endian message length indicator (MLI). Data is zero-padded
/// to a multiple of 8. Inputs of at most 8 bytes wrap to a single block.
pub struct Kwp<B: BlockTransform> {
    cipher: B,
    icv: [u8; KWP_IV_LEN],
}

/// Round up to the next multiple of the semiblock size
#[inline]
pub fn padded_len(len: usize) -> usize {
    (len + SEMIBLOCK_SIZE - 1) / SEMIBLOCK_SIZE * SEMIBLOCK_SIZE
}

/// KWP output length for `input_len` plaintext bytes
pub fn wrapped_len(input_len: usize) -> Result<usize> {
    validate::min_length("KWP plaintext", input_len, 1)?;
    validate::max_length("KWP plaintext", input_len, MAX_INPUT_LEN - 1)?;
    Ok(padded_len(input_len) + SEMIBLOCK_SIZE)
}

/// Upper bound on KWP output for `input_len` ciphertext bytes
pub fn unwrapped_len(input_len: usize) -> Result<usize> {
    validate::min_length("KWP ciphertext", input_len, SEMIBLOCK_SIZE)?;
    validate::multiple_of("KWP ciphertext", input_len, SEMIBLOCK_SIZE)?;
    validate::min_length("KWP ciphertext", input_len, MIN_WRAPPED_LEN)?;
    validate::max_length("KWP ciphertext", input_len, MAX_INPUT_LEN - 1)?;
    Ok(input_len - SEMIBLOCK_SIZE)
}

impl<B: BlockTransform> Kwp<B> {
    /// Create a KWP transform using the alternative initial value `A65959A6`
    pub fn new(cipher: B) -> Self {
        Self {
            cipher,
            icv: KWP_ALTERNATE_IV,
        }
    }

    /// Create a KWP transform with a caller-chosen 4-byte initial value prefix
    pub fn with_iv(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length("KWP initial value", iv.len(), KWP_IV_LEN)?;
        let mut kwp = Self::new(cipher);
        kwp.icv.copy_from_slice(iv);
        Ok(kwp)
    }
}

impl<B: BlockTransform> KeyWrapAlgorithm for Kwp<B> {
    fn name(&self) -> &'static str {
        "KWP"
    }

    fn wrapped_len(&self, input_len: usize) -> Result<usize> {
        wrapped_len(input_len)
    }

    fn unwrapped_len(&self, input_len: usize) -> Result<usize> {
        unwrapped_len(input_len)
    }

    fn wrap_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let out_len = self.wrapped_len(input.len())?;
        validate::buffer("KWP output", output.len(), out_len)?;

        let out = &mut output[..out_len];
        let data_end = SEMIBLOCK_SIZE + input.len();
        out[..KWP_IV_LEN].copy_from_slice(&self.icv);
        out[KWP_IV_LEN..SEMIBLOCK_SIZE].copy_from_slice(&u32_to_be_bytes(input.len() as u32));
        out[SEMIBLOCK_SIZE..data_end].copy_from_slice(input);
        out[data_end..].fill(0);
        wrap_in_place(&self.cipher, out)?;
        Ok(out_len)
    }

    fn unwrap_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let padded = self.unwrapped_len(input.len())?;
        validate::buffer("KWP output", output.len(), padded)?;

        let mut scratch = Zeroizing::new(input.to_vec());
        unwrap_in_place(&self.cipher, &mut scratch)?;

        let mli = u32_from_be_bytes(&scratch[KWP_IV_LEN..KWP_IV_LEN + KWP_MLI_LEN]);
        let icv_ok = ct_eq_choice(&scratch[..KWP_IV_LEN], self.icv);
        let mli_ok = ct_in_range(
            u64::from(mli),
            (padded - SEMIBLOCK_SIZE) as u64,
            padded as u64,
        );

        // An out-of-range MLI checks an empty padding span
        let pad_start = u32::conditional_select(&(padded as u32), &mli, mli_ok) as usize;
        let pad_ok = ct_is_zero(&scratch[SEMIBLOCK_SIZE + pad_start..SEMIBLOCK_SIZE + padded]);

        let valid: bool = (icv_ok & mli_ok & pad_ok).into();
        if !valid {
            warn!(len = input.len(), "KWP integrity check failed");
        }
        validate::authentication(valid, "KWP")?;

        let len = mli as usize;
        output[..len].copy_from_slice(&scratch[SEMIBLOCK_SIZE..SEMIBLOCK_SIZE + len]);
        Ok(len)
    }
}

impl<B: BlockTransform> Drop for Kwp<B> {
    fn drop(&mut self) {
        self.icv.zeroize();
    }
}
