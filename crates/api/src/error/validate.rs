//! Validation guards used at the session boundary

use super::{Error, Result};

/// Validate a key length against the variant's fixed size
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate an IV length against the variant's advertised IV size
#[inline(always)]
pub fn iv_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidIvLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that an output buffer can hold `required` bytes
#[inline(always)]
pub fn buffer(context: &'static str, actual: usize, required: usize) -> Result<()> {
    if actual < required {
        return Err(Error::BufferTooSmall {
            context,
            required,
            actual,
        });
    }
    Ok(())
}

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::ParameterRejected { context, reason });
    }
    Ok(())
}

/// Validate a lifecycle condition
#[inline(always)]
pub fn state(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidState { context, reason });
    }
    Ok(())
}
