//! Constant values for keywrap cryptographic operations
//!
//! This library provides the constants shared by the block cipher adapter,
//! the key-wrap transform and the variant registry.

#![no_std]

pub mod utils;
pub mod wrap;
