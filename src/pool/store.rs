use core::fmt;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::cursor::PoolCursor;
use crate::errors::DecodeResult;
use crate::header::HeaderLayout;
use crate::ser::{read_address, read_blob, read_uint256, ByteReader, SerKind};

/// The three value pools of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PoolKind {
    Address,
    Uint,
    Blob,
}

impl PoolKind {
    /// Canonical pool order inside the buffer.
    pub const ORDER: [PoolKind; 3] = [PoolKind::Address, PoolKind::Uint, PoolKind::Blob];

    /// Buffer section holding this pool.
    pub const fn section(self) -> SerKind {
        match self {
            PoolKind::Address => SerKind::AddressPool,
            PoolKind::Uint => SerKind::UintPool,
            PoolKind::Blob => SerKind::BlobPool,
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.section(), f)
    }
}

/// A value taken from one of the pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolValue {
    Address(Address),
    Uint(U256),
    Blob(Bytes),
}

impl PoolValue {
    pub fn kind(&self) -> PoolKind {
        match self {
            PoolValue::Address(_) => PoolKind::Address,
            PoolValue::Uint(_) => PoolKind::Uint,
            PoolValue::Blob(_) => PoolKind::Blob,
        }
    }
}

/// Owned pool contents extracted from a submission buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    pub addresses: Vec<Address>,
    pub uints: Vec<U256>,
    pub blobs: Vec<Bytes>,
}

impl Pools {
    /// Reads all three pools at the sizes `layout` declares. The cursor must
    /// sit at the first byte of the address pool.
    pub fn read(cursor: &mut ByteReader<'_>, layout: &HeaderLayout) -> DecodeResult<Self> {
        let addresses = (0..layout.address_count)
            .map(|_| read_address(cursor, SerKind::AddressPool, "address"))
            .collect::<Result<Vec<_>, _>>()?;
        let uints = (0..layout.uint_count)
            .map(|_| read_uint256(cursor, SerKind::UintPool, "uint"))
            .collect::<Result<Vec<_>, _>>()?;
        let blobs = layout
            .blob_lengths
            .iter()
            .map(|len| read_blob(cursor, SerKind::BlobPool, "blob", *len))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            addresses,
            uints,
            blobs,
        })
    }

    /// Hands the pools to a fresh cursor set for one decode call.
    pub fn into_cursor(self) -> PoolCursor {
        PoolCursor::new(self)
    }
}
