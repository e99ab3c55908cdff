//! Known-answer test vectors
//!
//! Vectors live as JSON under `src/vectors/json` and are parsed once per
//! test binary.

use std::path::{Path, PathBuf};

pub mod key_wrap;

pub use key_wrap::{key_wrap_vectors, load, Expect, ExpectedError, KeyWrapFile, KeyWrapVector, VectorError};

/// Directory holding the JSON vector files
pub fn json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("json")
}
