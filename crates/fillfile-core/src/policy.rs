//! Data-source policies for filling a file
//!
//! A [`FillPolicy`] selects what byte values the fill engine writes:
//! constants, a repeating pattern, uniform pseudo-random data, or a random
//! selection from a small set of candidate bytes.

use crate::error::{Error, Result};

/// The data-generation strategy for one fill run.
///
/// Exactly one policy is active per run. The constructors reject or resolve
/// the degenerate sequences (empty pattern, single-element random set); the
/// engine re-checks for empty ones since the variants themselves are public.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillPolicy {
    /// Every byte is 0x00
    Zeros,

    /// Every byte is 0xFF
    Ones,

    /// A non-empty byte sequence repeated cyclically
    Pattern(Vec<u8>),

    /// Independent uniform draws over the full byte range
    Random,

    /// Independent uniform draws from a fixed set of two or more bytes
    RandomFrom(Vec<u8>),
}

impl FillPolicy {
    /// Build a repeating-pattern policy from a byte sequence.
    ///
    /// The sequence must contain at least one byte; `context` names the
    /// offending command-line text in the error message.
    pub fn pattern(bytes: Vec<u8>, context: &str) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidByteSequence(format!(
                "Pattern to repeat must have at least one byte: {context}"
            )));
        }
        Ok(Self::Pattern(bytes))
    }

    /// Resolve the byte sequence given with a random-data request.
    ///
    /// With no bytes the request means fully uniform random data. A single
    /// byte is a constant fill, not random: selecting from one item has only
    /// one outcome. Two or more bytes select randomly from the set. This
    /// mirrors the documented behavior of the `-r` option.
    pub fn random_from(bytes: Vec<u8>) -> Self {
        match bytes.len() {
            0 => Self::Random,
            1 => Self::Pattern(bytes),
            _ => Self::RandomFrom(bytes),
        }
    }

    /// Whether output depends on a pseudo-random generator.
    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random | Self::RandomFrom(_))
    }

    /// The repeating unit for deterministic policies, `None` for random ones.
    pub(crate) fn repeat_unit(&self) -> Option<&[u8]> {
        match self {
            Self::Zeros => Some(&[0x00]),
            Self::Ones => Some(&[0xFF]),
            Self::Pattern(bytes) => Some(bytes),
            Self::Random | Self::RandomFrom(_) => None,
        }
    }
}

impl Default for FillPolicy {
    /// Pseudo-random data is the default when no option selects otherwise.
    fn default() -> Self {
        Self::Random
    }
}
