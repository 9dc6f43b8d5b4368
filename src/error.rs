//! Error types for the keyswitch crate.
//!
//! The gesture state machine itself cannot fail: every level sequence and
//! every elapsed time has a defined next state.  Errors only arise around
//! it, when a configuration is checked, stored, or loaded.
//! All variants are `Copy` so they can be returned from config paths
//! without allocation.

use core::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Thresholds violate the ordering the state machine relies on.
    /// The `&'static str` names the offending relation.
    InvalidTiming(&'static str),
    /// A stored configuration blob failed to deserialize.
    Corrupted,
    /// A configuration could not be serialized.
    Encode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTiming(msg) => write!(f, "invalid timing: {msg}"),
            Self::Corrupted => write!(f, "stored config corrupted"),
            Self::Encode => write!(f, "config encode failed"),
        }
    }
}

impl core::error::Error for Error {}

impl From<postcard::Error> for Error {
    fn from(e: postcard::Error) -> Self {
        match e {
            postcard::Error::SerializeBufferFull
            | postcard::Error::SerializeSeqLengthUnknown
            | postcard::Error::SerdeSerCustom => Self::Encode,
            _ => Self::Corrupted,
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
