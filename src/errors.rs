//! Failure taxonomy for a single decode call.
//!
//! Every variant is fatal: a decode either returns a complete
//! [`Decoded`](crate::types::Decoded) value or one of these errors, never a
//! partially populated result.

use core::fmt;

use crate::pool::PoolKind;
use crate::ser::{SerError, SerKind};

/// Flag word that carried bits outside its defined set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagWord {
    Mining,
    /// Order flag word at the given order position.
    Order(usize),
}

impl fmt::Display for FlagWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagWord::Mining => write!(f, "mining flag word"),
            FlagWord::Order(index) => write!(f, "flag word of order {index}"),
        }
    }
}

/// Error returned when a submission buffer cannot be decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Cursor-level failure while reading a section.
    Ser(SerError),
    /// Header word count disagrees with the counts the header declares.
    HeaderLengthMismatch { declared: usize, expected: usize },
    /// Buffer length disagrees with the size implied by the header.
    BufferLengthMismatch { expected: usize, actual: usize },
    /// A flag word set bits that have no meaning.
    UndefinedFlagBits { word: FlagWord, bits: u16 },
    /// A header-declared size breached the configured decoder limits.
    LimitExceeded {
        limit: &'static str,
        max: usize,
        got: usize,
    },
    /// More values were requested from a pool than it declares.
    PoolExhausted { pool: PoolKind, declared: usize },
    /// Decoding finished with values left unread in a pool.
    PoolUnderRead {
        pool: PoolKind,
        declared: usize,
        consumed: usize,
    },
    /// A field table routed a field to a pool of the wrong value type.
    FieldPoolMismatch { field: &'static str, pool: PoolKind },
    /// Ring participant count outside `2..=8`.
    BadRingSize { ring: usize, size: usize },
    /// Participation entry referenced an order that does not exist.
    OrderIndexOutOfRange {
        ring: usize,
        slot: usize,
        index: usize,
        order_count: usize,
    },
    /// Hex transport encoding was invalid.
    InvalidHex(hex::FromHexError),
}

impl DecodeError {
    /// Buffer section the error points at, when it maps to one.
    pub fn section(&self) -> Option<SerKind> {
        match self {
            DecodeError::Ser(err) => Some(err.kind()),
            DecodeError::HeaderLengthMismatch { .. } | DecodeError::LimitExceeded { .. } => {
                Some(SerKind::Header)
            }
            DecodeError::UndefinedFlagBits {
                word: FlagWord::Mining,
                ..
            } => Some(SerKind::MiningFlags),
            DecodeError::UndefinedFlagBits {
                word: FlagWord::Order(_),
                ..
            } => Some(SerKind::OrderFlags),
            DecodeError::PoolExhausted { pool, .. } | DecodeError::PoolUnderRead { pool, .. } => {
                Some(pool.section())
            }
            DecodeError::BadRingSize { .. } | DecodeError::OrderIndexOutOfRange { .. } => {
                Some(SerKind::Participation)
            }
            DecodeError::BufferLengthMismatch { .. }
            | DecodeError::FieldPoolMismatch { .. }
            | DecodeError::InvalidHex(_) => None,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Ser(err) => write!(f, "{err}"),
            DecodeError::HeaderLengthMismatch { declared, expected } => write!(
                f,
                "header declares {declared} words but its counts require {expected}"
            ),
            DecodeError::BufferLengthMismatch { expected, actual } => write!(
                f,
                "header implies a {expected}-byte buffer, got {actual} bytes"
            ),
            DecodeError::UndefinedFlagBits { word, bits } => {
                write!(f, "{word} sets undefined bits {bits:#06x}")
            }
            DecodeError::LimitExceeded { limit, max, got } => {
                write!(f, "{limit} limit exceeded: {got} > {max}")
            }
            DecodeError::PoolExhausted { pool, declared } => {
                write!(f, "{pool} exhausted after {declared} values")
            }
            DecodeError::PoolUnderRead {
                pool,
                declared,
                consumed,
            } => write!(
                f,
                "{pool} declares {declared} values but only {consumed} were used"
            ),
            DecodeError::FieldPoolMismatch { field, pool } => {
                write!(f, "field `{field}` cannot be read from the {pool}")
            }
            DecodeError::BadRingSize { ring, size } => {
                write!(f, "bad ring size: ring {ring} has {size} participants")
            }
            DecodeError::OrderIndexOutOfRange {
                ring,
                slot,
                index,
                order_count,
            } => write!(
                f,
                "ring {ring} slot {slot} references order {index} of {order_count}"
            ),
            DecodeError::InvalidHex(err) => write!(f, "invalid hex input: {err}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Ser(err) => Some(err),
            DecodeError::InvalidHex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SerError> for DecodeError {
    fn from(err: SerError) -> Self {
        DecodeError::Ser(err)
    }
}

impl From<hex::FromHexError> for DecodeError {
    fn from(err: hex::FromHexError) -> Self {
        DecodeError::InvalidHex(err)
    }
}

/// Result alias used by every decode step.
pub type DecodeResult<T> = core::result::Result<T, DecodeError>;
