//! Validation utilities for key-wrap primitives

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of `unit`-byte units
///
/// The reported expectation is the next multiple of `unit`.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if actual % unit != 0 {
        return Err(Error::Length {
            context,
            expected: actual + (unit - actual % unit),
            actual,
        });
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::KeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an output buffer capacity
#[inline(always)]
pub fn buffer(context: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::Buffer {
            context,
            required,
            actual,
        });
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
