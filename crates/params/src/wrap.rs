//! Constants for AES key wrapping (NIST SP 800-38F)
//!
//! KW is the RFC 3394 construction operating on whole semiblocks; KWP is the
//! RFC 5649 variant that prefixes a message length indicator and zero-pads.

/// Semiblock size in bytes; the chaining unit of both wrap modes
pub const SEMIBLOCK_SIZE: usize = 8;

/// Number of passes over the semiblocks performed by the wrapping function
pub const KW_ROUNDS: usize = 6;

/// Default initial value for KW (RFC 3394 §2.2.3.1)
pub const KW_DEFAULT_IV: [u8; KW_IV_LEN] = [0xA6; KW_IV_LEN];

/// Alternative initial value prefix for KWP (RFC 5649 §3)
pub const KWP_ALTERNATE_IV: [u8; KWP_IV_LEN] = [0xA6, 0x59, 0x59, 0xA6];

/// Caller-visible IV length of the KW variants
pub const KW_IV_LEN: usize = 8;

/// Caller-visible IV length of the KWP variants
pub const KWP_IV_LEN: usize = 4;

/// Size of the message length indicator embedded by KWP
pub const KWP_MLI_LEN: usize = 4;

/// Smallest ciphertext either mode will accept for unwrapping
pub const MIN_WRAPPED_LEN: usize = 2 * SEMIBLOCK_SIZE;

/// Inputs of this many bytes or more are refused
pub const MAX_INPUT_LEN: usize = 1 << 31;

/// Advertised block size of the wrap ciphers, in bits
pub const WRAP_BLOCK_BITS: usize = SEMIBLOCK_SIZE * 8;
