use core::fmt;
use serde::{Deserialize, Serialize};

/// Buffer section being read when a failure occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SerKind {
    /// Length-prefixed header words.
    Header,
    /// Mining flag word.
    MiningFlags,
    /// One flag word per order.
    OrderFlags,
    /// Ring participation entries.
    Participation,
    /// Fixed-width address pool.
    AddressPool,
    /// Fixed-width 256-bit integer pool.
    UintPool,
    /// Variable-width byte blob pool.
    BlobPool,
}

impl fmt::Display for SerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerKind::Header => write!(f, "header"),
            SerKind::MiningFlags => write!(f, "mining flags"),
            SerKind::OrderFlags => write!(f, "order flags"),
            SerKind::Participation => write!(f, "participation"),
            SerKind::AddressPool => write!(f, "address pool"),
            SerKind::UintPool => write!(f, "uint pool"),
            SerKind::BlobPool => write!(f, "blob pool"),
        }
    }
}

/// Failure raised by the byte cursor primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerError {
    /// Buffer ended before the field could be read.
    UnexpectedEnd {
        /// Section being read.
        kind: SerKind,
        /// Field being read.
        field: &'static str,
        /// Offset at which the read was attempted.
        offset: usize,
    },
    /// A declared size does not fit the buffer or overflows `usize`.
    InvalidLength {
        /// Section being read.
        kind: SerKind,
        /// Field being read.
        field: &'static str,
    },
    /// Bytes remained after the final section.
    TrailingBytes {
        /// Section that should have ended the buffer.
        kind: SerKind,
        /// Bytes consumed so far.
        consumed: usize,
        /// Bytes left over.
        remaining: usize,
    },
}

impl SerError {
    pub fn unexpected_end(kind: SerKind, field: &'static str, offset: usize) -> Self {
        SerError::UnexpectedEnd {
            kind,
            field,
            offset,
        }
    }

    pub fn invalid_length(kind: SerKind, field: &'static str) -> Self {
        SerError::InvalidLength { kind, field }
    }

    pub fn trailing_bytes(kind: SerKind, consumed: usize, remaining: usize) -> Self {
        SerError::TrailingBytes {
            kind,
            consumed,
            remaining,
        }
    }

    /// Section associated with the error.
    pub fn kind(&self) -> SerKind {
        match *self {
            SerError::UnexpectedEnd { kind, .. }
            | SerError::InvalidLength { kind, .. }
            | SerError::TrailingBytes { kind, .. } => kind,
        }
    }
}

impl fmt::Display for SerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerError::UnexpectedEnd {
                kind,
                field,
                offset,
            } => write!(f, "{kind}: buffer ended reading `{field}` at offset {offset}"),
            SerError::InvalidLength { kind, field } => {
                write!(f, "{kind}: invalid length for `{field}`")
            }
            SerError::TrailingBytes {
                kind,
                consumed,
                remaining,
            } => write!(
                f,
                "{kind}: {remaining} trailing bytes after offset {consumed}"
            ),
        }
    }
}

impl std::error::Error for SerError {}

pub type SerResult<T> = core::result::Result<T, SerError>;
