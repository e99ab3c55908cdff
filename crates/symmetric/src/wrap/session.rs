//! Wrap cipher session
//!
//! A session binds one variant, one direction, an optional AES key schedule
//! and an optional caller IV. Its lifecycle is
//!
//! ```text
//! Uninitialized --init(key)--> Keyed --process--> Processed --finalize--> Finalized
//!                                ^                    |
//!                                +------init----------+
//! ```
//!
//! `process` moves a whole message in one call. A further message needs
//! another init first. `Finalized` is terminal.

use keywrap_algorithms::block::AesKek;
use keywrap_algorithms::wrap::{kw, kwp, KeyWrapAlgorithm, Kw, Kwp};
use keywrap_api::{Direction, SecretBytes};
use keywrap_params::wrap::KW_IV_LEN;
use tracing::debug;

use super::params::{ContextParams, ContextParamsUpdate};
use super::registry::WrapVariant;
use crate::cipher::CipherContext;
use crate::error::{validate, validate_session_state, Error, Result, SymmetricResultExt};

/// Lifecycle state of a [`WrapSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No key schedule yet
    Uninitialized,
    /// Ready to process one message
    Keyed,
    /// A message has been processed; init again for another
    Processed,
    /// Terminal
    Finalized,
}

/// One key / direction / IV binding of a wrap variant
pub struct WrapSession {
    variant: &'static WrapVariant,
    direction: Direction,
    pad: bool,
    schedule: Option<AesKek>,
    iv: SecretBytes<KW_IV_LEN>,
    iv_set: bool,
    state: SessionState,
}

impl WrapSession {
    /// Create an uninitialized session
    pub fn new(variant: &'static WrapVariant, direction: Direction) -> Self {
        Self {
            variant,
            direction,
            pad: variant.padding(),
            schedule: None,
            iv: SecretBytes::zeroed(),
            iv_set: false,
            state: SessionState::Uninitialized,
        }
    }

    /// The variant this session was created from
    pub fn variant(&self) -> &'static WrapVariant {
        self.variant
    }

    /// The direction fixed at construction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Set key and/or IV in the session's own direction
    pub fn init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()> {
        let name = self.variant.name;
        validate_session_state(
            self.state != SessionState::Finalized,
            name,
            "session is finalized",
        )?;

        // Validate everything before touching the session
        if let Some(iv) = iv {
            validate::iv_length(name, iv.len(), self.variant.iv_len)?;
        }
        let schedule = match key {
            Some(key) => {
                validate::key_length(name, key.len(), self.variant.key_len())?;
                let kek = AesKek::with_key_len(key, self.variant.key_len())
                    .map_primitive_err_with(name)?;
                Some(kek)
            }
            None => None,
        };

        if let Some(iv) = iv {
            self.iv[..iv.len()].copy_from_slice(iv);
            self.iv_set = true;
        }
        if schedule.is_some() {
            self.schedule = schedule;
        }
        self.state = if self.schedule.is_some() {
            SessionState::Keyed
        } else {
            SessionState::Uninitialized
        };

        debug!(
            variant = name,
            direction = %self.direction,
            key = key.is_some(),
            iv = iv.is_some(),
            "wrap session init"
        );
        Ok(())
    }

    fn init_for(
        &mut self,
        direction: Direction,
        key: Option<&[u8]>,
        iv: Option<&[u8]>,
    ) -> Result<()> {
        validate_session_state(
            self.direction == direction,
            self.variant.name,
            "init direction does not match session direction",
        )?;
        self.init(key, iv)
    }

    fn transform<'a>(&'a self, kek: &'a AesKek) -> Result<Box<dyn KeyWrapAlgorithm + 'a>> {
        let name = self.variant.name;
        let iv = self.iv_set.then(|| &self.iv[..self.variant.iv_len]);
        Ok(match (self.pad, iv) {
            (false, None) => Box::new(Kw::new(kek)),
            (false, Some(iv)) => Box::new(Kw::with_iv(kek, iv).map_primitive_err_with(name)?),
            (true, None) => Box::new(Kwp::new(kek)),
            (true, Some(iv)) => Box::new(Kwp::with_iv(kek, iv).map_primitive_err_with(name)?),
        })
    }
}

impl CipherContext for WrapSession {
    fn encrypt_init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()> {
        self.init_for(Direction::Encrypt, key, iv)
    }

    fn decrypt_init(&mut self, key: Option<&[u8]>, iv: Option<&[u8]>) -> Result<()> {
        self.init_for(Direction::Decrypt, key, iv)
    }

    fn output_size(&self, input_len: usize) -> Result<usize> {
        let name = self.variant.name;
        validate_session_state(
            self.state != SessionState::Finalized,
            name,
            "session is finalized",
        )?;

        match (self.direction, self.pad) {
            (Direction::Encrypt, false) => kw::wrapped_len(input_len),
            (Direction::Encrypt, true) => kwp::wrapped_len(input_len),
            (Direction::Decrypt, false) => kw::unwrapped_len(input_len),
            (Direction::Decrypt, true) => kwp::unwrapped_len(input_len),
        }
        .map_primitive_err_with(name)
    }

    fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        let name = self.variant.name;
        match self.state {
            SessionState::Keyed => {}
            SessionState::Uninitialized => {
                return Err(Error::InvalidState {
                    context: name,
                    reason: "key not set",
                })
            }
            SessionState::Processed => {
                return Err(Error::InvalidState {
                    context: name,
                    reason: "message already processed; init again",
                })
            }
            SessionState::Finalized => {
                return Err(Error::InvalidState {
                    context: name,
                    reason: "session is finalized",
                })
            }
        }

        let required = self.output_size(input.len())?;
        validate::buffer(name, output.len(), required)?;

        let written = {
            let kek = self.schedule.as_ref().ok_or(Error::InvalidState {
                context: name,
                reason: "key not set",
            })?;
            let transform = self.transform(kek)?;
            let result = match self.direction {
                Direction::Encrypt => transform.wrap_into(input, output),
                Direction::Decrypt => transform.unwrap_into(input, output),
            };
            result.map_primitive_err_with(name)?
        };

        self.state = SessionState::Processed;
        debug!(
            variant = name,
            direction = %self.direction,
            input_len = input.len(),
            output_len = written,
            "wrap session processed message"
        );
        Ok(written)
    }

    fn finalize(&mut self, _output: &mut [u8]) -> Result<usize> {
        self.state = SessionState::Finalized;
        debug!(variant = self.variant.name, "wrap session finalized");
        Ok(0)
    }

    fn get_params(&self) -> ContextParams {
        ContextParams {
            key_len: self.variant.key_len(),
            iv_len: self.variant.iv_len,
            padding: self.pad,
            iv_set: self.iv_set,
        }
    }

    fn set_params(&mut self, params: &ContextParamsUpdate) -> Result<()> {
        if let Some(key_len) = params.key_len {
            validate::parameter(
                key_len == self.variant.key_len(),
                self.variant.name,
                "key length is fixed for this variant",
            )?;
        }
        Ok(())
    }
}

impl core::fmt::Debug for WrapSession {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WrapSession")
            .field("variant", &self.variant.name)
            .field("direction", &self.direction)
            .field("state", &self.state)
            .field("iv_set", &self.iv_set)
            .finish_non_exhaustive()
    }
}
