//! AES key-wrap vectors
//!
//! Sources: RFC 3394 §4, RFC 5649 §6 and KWP output cross-checked against
//! OpenSSL. Negative vectors are valid ciphertexts with one byte altered,
//! or ciphertexts presented to the wrong variant.

use std::fs;

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

use super::json_dir;

/// Errors raised while loading or decoding vectors
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vector file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hex decode error in vector {id}: {source}")]
    Hex {
        id: u32,
        #[source]
        source: hex::FromHexError,
    },

    #[error("vector {id} names unknown variant {variant}")]
    UnknownVariant { id: u32, variant: String },
}

/// Whether a vector must round-trip or must be refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    Valid,
    Invalid,
}

fn default_expect() -> Expect {
    Expect::Valid
}

/// Error category an invalid vector must produce on unwrap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedError {
    Integrity,
    InputLength,
}

impl ExpectedError {
    /// Whether `err` belongs to this category
    pub fn matches(self, err: &keywrap_api::Error) -> bool {
        matches!(
            (self, err),
            (Self::Integrity, keywrap_api::Error::IntegrityCheckFailed { .. })
                | (Self::InputLength, keywrap_api::Error::InvalidInputLength { .. })
        )
    }
}

/// One wrap / unwrap case
#[derive(Debug, Clone, Deserialize)]
pub struct KeyWrapVector {
    pub id: u32,
    pub variant: String,
    pub kek: String,
    #[serde(default)]
    pub iv: Option<String>,
    #[serde(default)]
    pub plaintext: String,
    pub ciphertext: String,
    #[serde(default = "default_expect")]
    pub result: Expect,
    #[serde(default)]
    pub error: Option<ExpectedError>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Top level of `key_wrap.json`
#[derive(Debug, Deserialize)]
pub struct KeyWrapFile {
    pub source: String,
    pub tests: Vec<KeyWrapVector>,
}

impl KeyWrapVector {
    fn decode(&self, field: &str) -> Result<Vec<u8>, VectorError> {
        hex::decode(field).map_err(|source| VectorError::Hex {
            id: self.id,
            source,
        })
    }

    pub fn kek(&self) -> Result<Vec<u8>, VectorError> {
        self.decode(&self.kek)
    }

    pub fn iv(&self) -> Result<Option<Vec<u8>>, VectorError> {
        self.iv.as_deref().map(|iv| self.decode(iv)).transpose()
    }

    pub fn plaintext(&self) -> Result<Vec<u8>, VectorError> {
        self.decode(&self.plaintext)
    }

    pub fn ciphertext(&self) -> Result<Vec<u8>, VectorError> {
        self.decode(&self.ciphertext)
    }

    /// Resolve the variant through the registry
    pub fn wrap_variant(
        &self,
    ) -> Result<&'static keywrap_symmetric::WrapVariant, VectorError> {
        keywrap_symmetric::find(&self.variant).ok_or_else(|| VectorError::UnknownVariant {
            id: self.id,
            variant: self.variant.clone(),
        })
    }
}

/// Load and parse a key-wrap vector file from the vector directory
pub fn load(file: &str) -> Result<KeyWrapFile, VectorError> {
    let path = json_dir().join(file);
    let json = fs::read_to_string(&path).map_err(|source| VectorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(serde_json::from_str(&json)?)
}

static KEY_WRAP: Lazy<Result<KeyWrapFile, VectorError>> = Lazy::new(|| load("key_wrap.json"));

/// The parsed contents of `key_wrap.json`
pub fn key_wrap_vectors() -> Result<&'static KeyWrapFile, &'static VectorError> {
    KEY_WRAP.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_parses_and_decodes() {
        let file = key_wrap_vectors().unwrap();
        assert!(!file.tests.is_empty());
        for v in &file.tests {
            v.kek().unwrap();
            v.iv().unwrap();
            v.plaintext().unwrap();
            v.ciphertext().unwrap();
            v.wrap_variant().unwrap();
            if v.result == Expect::Invalid {
                assert!(v.error.is_some(), "vector {} lacks an error kind", v.id);
            }
        }
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(load("absent.json"), Err(VectorError::Io { .. })));
    }
}
