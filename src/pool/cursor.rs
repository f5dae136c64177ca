use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::store::{PoolKind, PoolValue, Pools};
use crate::errors::{DecodeError, DecodeResult};

/// Number of values consumed from each pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolUsage {
    pub addresses: usize,
    pub uints: usize,
    pub blobs: usize,
}

impl PoolUsage {
    pub fn get(&self, kind: PoolKind) -> usize {
        match kind {
            PoolKind::Address => self.addresses,
            PoolKind::Uint => self.uints,
            PoolKind::Blob => self.blobs,
        }
    }
}

/// Independent read positions over the three pools.
///
/// Each cursor moves values out of its pool one at a time; advancing one
/// pool never touches another. A cursor set is created per decode call and
/// dropped with it.
#[derive(Debug)]
pub struct PoolCursor {
    declared: PoolUsage,
    addresses: std::vec::IntoIter<Address>,
    uints: std::vec::IntoIter<U256>,
    blobs: std::vec::IntoIter<Bytes>,
}

impl PoolCursor {
    pub fn new(pools: Pools) -> Self {
        Self {
            declared: PoolUsage {
                addresses: pools.addresses.len(),
                uints: pools.uints.len(),
                blobs: pools.blobs.len(),
            },
            addresses: pools.addresses.into_iter(),
            uints: pools.uints.into_iter(),
            blobs: pools.blobs.into_iter(),
        }
    }

    pub fn next_address(&mut self) -> DecodeResult<Address> {
        let declared = self.declared.addresses;
        self.addresses.next().ok_or(DecodeError::PoolExhausted {
            pool: PoolKind::Address,
            declared,
        })
    }

    pub fn next_uint(&mut self) -> DecodeResult<U256> {
        let declared = self.declared.uints;
        self.uints.next().ok_or(DecodeError::PoolExhausted {
            pool: PoolKind::Uint,
            declared,
        })
    }

    pub fn next_bytes(&mut self) -> DecodeResult<Bytes> {
        let declared = self.declared.blobs;
        self.blobs.next().ok_or(DecodeError::PoolExhausted {
            pool: PoolKind::Blob,
            declared,
        })
    }

    /// Takes the next value from the pool named by `kind`.
    pub fn take(&mut self, kind: PoolKind) -> DecodeResult<PoolValue> {
        match kind {
            PoolKind::Address => self.next_address().map(PoolValue::Address),
            PoolKind::Uint => self.next_uint().map(PoolValue::Uint),
            PoolKind::Blob => self.next_bytes().map(PoolValue::Blob),
        }
    }

    /// Values consumed so far from each pool.
    pub fn usage(&self) -> PoolUsage {
        PoolUsage {
            addresses: self.declared.addresses - self.addresses.len(),
            uints: self.declared.uints - self.uints.len(),
            blobs: self.declared.blobs - self.blobs.len(),
        }
    }

    /// Ends the cursor set, failing if any pool still holds unread values.
    pub fn finish(self) -> DecodeResult<PoolUsage> {
        let usage = self.usage();
        for pool in PoolKind::ORDER {
            let declared = self.declared.get(pool);
            let consumed = usage.get(pool);
            if consumed != declared {
                return Err(DecodeError::PoolUnderRead {
                    pool,
                    declared,
                    consumed,
                });
            }
        }
        Ok(usage)
    }
}
