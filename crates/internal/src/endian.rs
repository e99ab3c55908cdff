//! Big-endian helpers for semiblock arithmetic

/// Read a big-endian u32 from the first four bytes of `bytes`
pub fn u32_from_be_bytes(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Big-endian encoding of a u32
pub fn u32_to_be_bytes(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// XOR a u64 counter, encoded big-endian, into an 8-byte semiblock
pub fn xor_be_u64(semiblock: &mut [u8], value: u64) {
    for (dst, src) in semiblock.iter_mut().zip(value.to_be_bytes()) {
        *dst ^= src;
    }
}
