use core::fmt;

use super::DecoderLimits;
use crate::types::MIN_RING_SIZE;

/// Smallest well-formed submission: header length, five header words and
/// the mining flag word.
pub const MIN_SUBMISSION_BYTES: u32 = 2 + 5 * 2 + 2;

/// Error enumeration for invalid limit sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Buffer limit cannot hold even an empty submission.
    BufferTooSmall { min: u32, got: u32 },
    /// Rings are allowed but too few orders to fill one.
    RingsWithoutOrders { max_orders: u16 },
    /// Limits document failed to parse.
    Json(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::BufferTooSmall { min, got } => {
                write!(f, "max_buffer_bytes {got} is below the minimum {min}")
            }
            ConfigError::RingsWithoutOrders { max_orders } => write!(
                f,
                "max_orders {max_orders} cannot fill a ring of {MIN_RING_SIZE}"
            ),
            ConfigError::Json(reason) => write!(f, "invalid limits document: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Checks that a limit set can accept at least one well-formed submission.
pub fn validate(limits: &DecoderLimits) -> Result<(), ConfigError> {
    if limits.max_buffer_bytes < MIN_SUBMISSION_BYTES {
        return Err(ConfigError::BufferTooSmall {
            min: MIN_SUBMISSION_BYTES,
            got: limits.max_buffer_bytes,
        });
    }
    if limits.max_rings > 0 && (limits.max_orders as usize) < MIN_RING_SIZE {
        return Err(ConfigError::RingsWithoutOrders {
            max_orders: limits.max_orders,
        });
    }
    Ok(())
}
