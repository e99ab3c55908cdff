//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Slices of different lengths compare unequal; only the length is leaked.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns a Choice of 1 when every byte of `bytes` is zero
///
/// The whole slice is always scanned.
pub fn ct_is_zero(bytes: &[u8]) -> Choice {
    let acc = bytes.iter().fold(0u8, |acc, &b| acc | b);
    acc.ct_eq(&0u8)
}

/// Constant-time `lo < x <= hi` over 64-bit values
pub fn ct_in_range(x: u64, lo: u64, hi: u64) -> Choice {
    x.ct_gt(&lo) & !x.ct_gt(&hi)
}
