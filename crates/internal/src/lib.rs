//! Internal utilities for the keywrap library
//!
//! Not part of the public API; shared by the algorithm crates only.

#![no_std]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
