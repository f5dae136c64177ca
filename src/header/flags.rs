use serde::{Deserialize, Serialize};

use crate::errors::{DecodeError, DecodeResult, FlagWord};
use crate::pool::PoolKind;

/// One row of a flag table: the bit that gates a field and the pool the
/// field is read from when the bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule<F> {
    pub field: F,
    pub bit: u16,
    pub pool: PoolKind,
}

impl<F> FieldRule<F> {
    /// Bit mask of this rule inside its flag word.
    pub const fn mask(&self) -> u16 {
        1 << self.bit
    }
}

/// Optional fields of the mining record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MiningField {
    FeeRecipient,
    Miner,
    Signature,
}

impl MiningField {
    pub const fn name(self) -> &'static str {
        match self {
            MiningField::FeeRecipient => "fee_recipient",
            MiningField::Miner => "miner",
            MiningField::Signature => "signature",
        }
    }
}

/// Mining fields in pool-read order.
pub const MINING_FIELD_TABLE: [FieldRule<MiningField>; 3] = [
    FieldRule {
        field: MiningField::FeeRecipient,
        bit: 0,
        pool: PoolKind::Address,
    },
    FieldRule {
        field: MiningField::Miner,
        bit: 1,
        pool: PoolKind::Address,
    },
    FieldRule {
        field: MiningField::Signature,
        bit: 2,
        pool: PoolKind::Blob,
    },
];

/// Optional, pool-backed fields of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    DualAuth,
    Broker,
    OrderInterceptor,
    Wallet,
    ValidSince,
    ValidUntil,
    Signature,
    DualAuthSignature,
}

impl OrderField {
    pub const fn name(self) -> &'static str {
        match self {
            OrderField::DualAuth => "dual_auth",
            OrderField::Broker => "broker",
            OrderField::OrderInterceptor => "order_interceptor",
            OrderField::Wallet => "wallet",
            OrderField::ValidSince => "valid_since",
            OrderField::ValidUntil => "valid_until",
            OrderField::Signature => "signature",
            OrderField::DualAuthSignature => "dual_auth_signature",
        }
    }
}

/// Optional order fields in pool-read order. Bit 6 is the all-or-none flag,
/// which reads nothing.
pub const ORDER_FIELD_TABLE: [FieldRule<OrderField>; 8] = [
    FieldRule {
        field: OrderField::DualAuth,
        bit: 0,
        pool: PoolKind::Address,
    },
    FieldRule {
        field: OrderField::Broker,
        bit: 1,
        pool: PoolKind::Address,
    },
    FieldRule {
        field: OrderField::OrderInterceptor,
        bit: 2,
        pool: PoolKind::Address,
    },
    FieldRule {
        field: OrderField::Wallet,
        bit: 3,
        pool: PoolKind::Address,
    },
    FieldRule {
        field: OrderField::ValidSince,
        bit: 4,
        pool: PoolKind::Uint,
    },
    FieldRule {
        field: OrderField::ValidUntil,
        bit: 5,
        pool: PoolKind::Uint,
    },
    FieldRule {
        field: OrderField::Signature,
        bit: 7,
        pool: PoolKind::Blob,
    },
    FieldRule {
        field: OrderField::DualAuthSignature,
        bit: 8,
        pool: PoolKind::Blob,
    },
];

/// Order flag bit carrying the all-or-none boolean.
pub const ALL_OR_NONE_BIT: u16 = 6;

const fn table_mask<F: Copy, const N: usize>(table: &[FieldRule<F>; N]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < N {
        mask |= 1 << table[i].bit;
        i += 1;
    }
    mask
}

const MINING_DEFINED_BITS: u16 = table_mask(&MINING_FIELD_TABLE);
const ORDER_DEFINED_BITS: u16 = table_mask(&ORDER_FIELD_TABLE) | (1 << ALL_OR_NONE_BIT);

/// Validated mining flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MiningFlags(u16);

impl MiningFlags {
    /// Rejects words with bits outside [`MINING_FIELD_TABLE`].
    pub fn parse(raw: u16) -> DecodeResult<Self> {
        let undefined = raw & !MINING_DEFINED_BITS;
        if undefined != 0 {
            return Err(DecodeError::UndefinedFlagBits {
                word: FlagWord::Mining,
                bits: undefined,
            });
        }
        Ok(Self(raw))
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn has(self, rule: &FieldRule<MiningField>) -> bool {
        self.0 & rule.mask() != 0
    }

    pub fn has_fee_recipient(self) -> bool {
        self.has(&MINING_FIELD_TABLE[0])
    }

    pub fn has_miner(self) -> bool {
        self.has(&MINING_FIELD_TABLE[1])
    }

    pub fn has_signature(self) -> bool {
        self.has(&MINING_FIELD_TABLE[2])
    }
}

/// Validated per-order flag word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderFlags(u16);

impl OrderFlags {
    /// Rejects words with bits outside [`ORDER_FIELD_TABLE`] and the
    /// all-or-none bit. `position` identifies the order in errors.
    pub fn parse(raw: u16, position: usize) -> DecodeResult<Self> {
        let undefined = raw & !ORDER_DEFINED_BITS;
        if undefined != 0 {
            return Err(DecodeError::UndefinedFlagBits {
                word: FlagWord::Order(position),
                bits: undefined,
            });
        }
        Ok(Self(raw))
    }

    pub fn raw(self) -> u16 {
        self.0
    }

    pub fn has(self, rule: &FieldRule<OrderField>) -> bool {
        self.0 & rule.mask() != 0
    }

    /// Whether `field` is present, looked up through the field table.
    pub fn has_field(self, field: OrderField) -> bool {
        ORDER_FIELD_TABLE
            .iter()
            .find(|rule| rule.field == field)
            .is_some_and(|rule| self.has(rule))
    }

    pub fn all_or_none(self) -> bool {
        self.0 & (1 << ALL_OR_NONE_BIT) != 0
    }

    /// Table rows whose bit is set, in pool-read order.
    pub fn present(self) -> impl Iterator<Item = &'static FieldRule<OrderField>> {
        ORDER_FIELD_TABLE.iter().filter(move |rule| self.has(rule))
    }
}

/// One ring slot: the byte names the order occupying the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participation(u8);

impl Participation {
    pub fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub fn order_index(self) -> usize {
        usize::from(self.0)
    }
}
