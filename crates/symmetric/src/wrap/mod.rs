//! AES key-wrap sessions and variants
//!
//! Six variants are registered: AES-128/192/256 each with and without
//! padding. A variant creates [`WrapSession`]s bound to a direction; the
//! session drives the KW or KWP transform from keywrap-algorithms.

pub mod params;
pub mod registry;
pub mod session;

pub use params::{AlgorithmParams, CipherMode, ContextParams, ContextParamsUpdate};
pub use registry::{
    find, register_all, variant, CipherFlags, CipherRegistrar, WrapVariant, VARIANTS, WRAP_FLAGS,
};
pub use session::{SessionState, WrapSession};
