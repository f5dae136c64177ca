use alloy_primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::errors::{DecodeError, DecodeResult};
use crate::header::MiningField;
use crate::pool::PoolValue;

/// Metadata about the party that assembled the rings.
///
/// `None` means the field was absent from the buffer, not that it was empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mining {
    pub fee_recipient: Option<Address>,
    pub miner: Option<Address>,
    pub signature: Option<Bytes>,
}

impl Mining {
    /// Stores a pool value into `field`.
    pub fn assign(&mut self, field: MiningField, value: PoolValue) -> DecodeResult<()> {
        match (field, value) {
            (MiningField::FeeRecipient, PoolValue::Address(address)) => {
                self.fee_recipient = Some(address)
            }
            (MiningField::Miner, PoolValue::Address(address)) => self.miner = Some(address),
            (MiningField::Signature, PoolValue::Blob(bytes)) => self.signature = Some(bytes),
            (field, value) => {
                return Err(DecodeError::FieldPoolMismatch {
                    field: field.name(),
                    pool: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Current value of `field` as a pool value.
    pub fn get(&self, field: MiningField) -> Option<PoolValue> {
        match field {
            MiningField::FeeRecipient => self.fee_recipient.map(PoolValue::Address),
            MiningField::Miner => self.miner.map(PoolValue::Address),
            MiningField::Signature => self.signature.clone().map(PoolValue::Blob),
        }
    }

    /// True when no mining field was present.
    pub fn is_empty(&self) -> bool {
        self.fee_recipient.is_none() && self.miner.is_none() && self.signature.is_none()
    }
}
