//! Resource limits applied while decoding.
//!
//! Header words are 16-bit, so every count a submission can declare is
//! bounded already; the limits here let hosts tighten those bounds before
//! any section is allocated. A breached limit fails the decode with
//! [`DecodeError::LimitExceeded`](crate::DecodeError::LimitExceeded).

mod builder;
mod validate;

pub use builder::{DecoderLimitsBuilder, LimitsProfile};
pub use validate::{validate, ConfigError, MIN_SUBMISSION_BYTES};

use serde::{Deserialize, Serialize};

/// Upper bounds checked against the header before decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoderLimits {
    /// Largest accepted buffer, in bytes.
    pub max_buffer_bytes: u32,
    pub max_orders: u16,
    pub max_rings: u16,
    /// Applies to each pool separately.
    pub max_pool_entries: u16,
    /// Largest single blob.
    pub max_blob_bytes: u16,
}

impl DecoderLimits {
    /// Parses limits from JSON and validates them.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        let limits: DecoderLimits =
            serde_json::from_str(input).map_err(|err| ConfigError::Json(err.to_string()))?;
        validate(&limits)?;
        Ok(limits)
    }

    /// Serialises the limits to pretty JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|err| ConfigError::Json(err.to_string()))
    }
}

/// Defaults to the wire-format bounds, so every well-formed submission
/// decodes.
impl Default for DecoderLimits {
    fn default() -> Self {
        LIMITS_UNBOUNDED
    }
}

/// Opt-in profile for relayer-facing hosts that want allocation capped
/// below the wire-format bounds. Well-formed submissions with more orders,
/// pool entries or blob bytes than these are rejected.
pub const LIMITS_STANDARD: DecoderLimits = DecoderLimits {
    max_buffer_bytes: 1 << 20,
    max_orders: 256,
    max_rings: 128,
    max_pool_entries: 4096,
    max_blob_bytes: 1024,
};

/// Only the bounds imposed by the wire format itself.
pub const LIMITS_UNBOUNDED: DecoderLimits = DecoderLimits {
    max_buffer_bytes: u32::MAX,
    max_orders: u16::MAX,
    max_rings: u16::MAX,
    max_pool_entries: u16::MAX,
    max_blob_bytes: u16::MAX,
};
