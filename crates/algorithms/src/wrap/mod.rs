//! AES key wrapping (NIST SP 800-38F)
//!
//! Two transforms share one semiblock-chaining core:
//!
//! - [`Kw`]: RFC 3394 key wrap over whole 8-byte semiblocks
//! - [`Kwp`]: RFC 5649 key wrap with padding, for inputs of any length
//!
//! Both work in place over `A || R[1] || ... || R[n]`. When the buffer holds a
//! single data semiblock (`n == 1`) the six-round schedule is replaced by one
//! block cipher call on `A || R[1]`, in either mode.

use keywrap_internal::endian::xor_be_u64;
use keywrap_params::wrap::{KW_ROUNDS, SEMIBLOCK_SIZE};
use tracing::trace;
use zeroize::Zeroizing;

use crate::block::BlockTransform;
use crate::error::{validate, Result};

pub mod kw;
pub mod kwp;

pub use kw::Kw;
pub use kwp::Kwp;


/// A key-wrapping transform bound to a key-encryption key
///
/// The `*_len` methods answer the size query: they validate the input length
/// and return what the matching `*_into` call needs as output capacity.
pub trait KeyWrapAlgorithm {
    /// Short algorithm label used in errors and logs
    fn name(&self) -> &'static str;

    /// Exact wrapped length for an input of `input_len` bytes
    fn wrapped_len(&self, input_len: usize) -> Result<usize>;

    /// Unwrapped length for a ciphertext of `input_len` bytes
    ///
    /// Exact for KW. For KWP this is an upper bound; the real length is only
    /// known once the embedded length indicator has been recovered.
    fn unwrapped_len(&self, input_len: usize) -> Result<usize>;

    /// Wrap `input` into `output`, returning the number of bytes written
    fn wrap_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Unwrap `input` into `output`, returning the number of bytes written
    ///
    /// Nothing is written to `output` unless the integrity check passes.
    fn unwrap_into(&self, input: &[u8], output: &mut [u8]) -> Result<usize>;

    /// Wrap into a freshly allocated buffer
    fn wrap(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut out = vec![0u8; self.wrapped_len(input.len())?];
        let written = self.wrap_into(input, &mut out)?;
        out.truncate(written);
        Ok(out)
    }

    /// Unwrap into a freshly allocated buffer that is erased on drop
    fn unwrap(&self, input: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let mut out = Zeroizing::new(vec![0u8; self.unwrapped_len(input.len())?]);
        let written = self.unwrap_into(input, &mut out)?;
        out.truncate(written);
        Ok(out)
    }
}

/// Forward wrapping function W over `A || R[1..n]`
///
/// `buf[..8]` must already hold the initial value.
pub(crate) fn wrap_in_place<B>(cipher: &B, buf: &mut [u8]) -> Result<()>
where
    B: BlockTransform + ?Sized,
{
    validate::multiple_of("semiblocks", buf.len(), SEMIBLOCK_SIZE)?;
    validate::min_length("semiblocks", buf.len(), 2 * SEMIBLOCK_SIZE)?;
    let n = buf.len() / SEMIBLOCK_SIZE - 1;
    trace!(semiblocks = n, "wrap");

    if n == 1 {
        return cipher.encrypt_block(buf);
    }

    let mut block = Zeroizing::new([0u8; 2 * SEMIBLOCK_SIZE]);
    let (a, r) = buf.split_at_mut(SEMIBLOCK_SIZE);
    let mut t: u64 = 1;
    for _ in 0..KW_ROUNDS {
        for ri in r.chunks_exact_mut(SEMIBLOCK_SIZE) {
            block[..SEMIBLOCK_SIZE].copy_from_slice(a);
            block[SEMIBLOCK_SIZE..].copy_from_slice(ri);
            cipher.encrypt_block(&mut block[..])?;
            a.copy_from_slice(&block[..SEMIBLOCK_SIZE]);
            xor_be_u64(a, t);
            ri.copy_from_slice(&block[SEMIBLOCK_SIZE..]);
            t += 1;
        }
    }
    Ok(())
}

/// Inverse wrapping function W⁻¹ over `C[0] || C[1..n]`
///
/// On return `buf[..8]` holds the recovered initial value, unverified.
pub(crate) fn unwrap_in_place<B>(cipher: &B, buf: &mut [u8]) -> Result<()>
where
    B: BlockTransform + ?Sized,
{
    validate::multiple_of("semiblocks", buf.len(), SEMIBLOCK_SIZE)?;
    validate::min_length("semiblocks", buf.len(), 2 * SEMIBLOCK_SIZE)?;
    let n = buf.len() / SEMIBLOCK_SIZE - 1;
    trace!(semiblocks = n, "unwrap");

    if n == 1 {
        return cipher.decrypt_block(buf);
    }

    let mut block = Zeroizing::new([0u8; 2 * SEMIBLOCK_SIZE]);
    let (a, r) = buf.split_at_mut(SEMIBLOCK_SIZE);
    let mut t = (n * KW_ROUNDS) as u64;
    for _ in 0..KW_ROUNDS {
        for ri in r.chunks_exact_mut(SEMIBLOCK_SIZE).rev() {
            xor_be_u64(a, t);
            block[..SEMIBLOCK_SIZE].copy_from_slice(a);
            block[SEMIBLOCK_SIZE..].copy_from_slice(ri);
            cipher.decrypt_block(&mut block[..])?;
            a.copy_from_slice(&block[..SEMIBLOCK_SIZE]);
            ri.copy_from_slice(&block[SEMIBLOCK_SIZE..]);
            t -= 1;
        }
    }
    Ok(())
}
