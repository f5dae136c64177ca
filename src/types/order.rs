use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::errors::{DecodeError, DecodeResult};
use crate::header::OrderField;
use crate::pool::PoolValue;

/// Fields read from the buffer for one order.
///
/// Amounts and timestamps keep the full 256-bit pool precision; narrowing
/// is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFields {
    pub owner: Address,
    pub sell_token: Address,
    pub sell_amount: U256,
    pub buy_amount: U256,
    pub fee_amount: U256,
    pub dual_auth: Option<Address>,
    pub broker: Option<Address>,
    pub order_interceptor: Option<Address>,
    pub wallet: Option<Address>,
    pub valid_since: Option<U256>,
    pub valid_until: Option<U256>,
    pub signature: Option<Bytes>,
    pub dual_auth_signature: Option<Bytes>,
    pub all_or_none: bool,
}

impl OrderFields {
    /// Creates an order with the mandatory fields set and every optional
    /// field absent.
    pub fn new(
        owner: Address,
        sell_token: Address,
        sell_amount: U256,
        buy_amount: U256,
        fee_amount: U256,
    ) -> Self {
        Self {
            owner,
            sell_token,
            sell_amount,
            buy_amount,
            fee_amount,
            dual_auth: None,
            broker: None,
            order_interceptor: None,
            wallet: None,
            valid_since: None,
            valid_until: None,
            signature: None,
            dual_auth_signature: None,
            all_or_none: false,
        }
    }

    /// Stores a pool value into an optional field.
    pub fn assign(&mut self, field: OrderField, value: PoolValue) -> DecodeResult<()> {
        match (field, value) {
            (OrderField::DualAuth, PoolValue::Address(v)) => self.dual_auth = Some(v),
            (OrderField::Broker, PoolValue::Address(v)) => self.broker = Some(v),
            (OrderField::OrderInterceptor, PoolValue::Address(v)) => {
                self.order_interceptor = Some(v)
            }
            (OrderField::Wallet, PoolValue::Address(v)) => self.wallet = Some(v),
            (OrderField::ValidSince, PoolValue::Uint(v)) => self.valid_since = Some(v),
            (OrderField::ValidUntil, PoolValue::Uint(v)) => self.valid_until = Some(v),
            (OrderField::Signature, PoolValue::Blob(v)) => self.signature = Some(v),
            (OrderField::DualAuthSignature, PoolValue::Blob(v)) => {
                self.dual_auth_signature = Some(v)
            }
            (field, value) => {
                return Err(DecodeError::FieldPoolMismatch {
                    field: field.name(),
                    pool: value.kind(),
                })
            }
        }
        Ok(())
    }

    /// Current value of an optional field as a pool value.
    pub fn get(&self, field: OrderField) -> Option<PoolValue> {
        match field {
            OrderField::DualAuth => self.dual_auth.map(PoolValue::Address),
            OrderField::Broker => self.broker.map(PoolValue::Address),
            OrderField::OrderInterceptor => self.order_interceptor.map(PoolValue::Address),
            OrderField::Wallet => self.wallet.map(PoolValue::Address),
            OrderField::ValidSince => self.valid_since.map(PoolValue::Uint),
            OrderField::ValidUntil => self.valid_until.map(PoolValue::Uint),
            OrderField::Signature => self.signature.clone().map(PoolValue::Blob),
            OrderField::DualAuthSignature => self.dual_auth_signature.clone().map(PoolValue::Blob),
        }
    }
}

/// A decoded order together with the buy token its ring implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub fields: OrderFields,
    /// Sell token of the ring predecessor; `None` if no ring references
    /// this order.
    pub buy_token: Option<Address>,
}

impl Order {
    pub fn sell_token(&self) -> Address {
        self.fields.sell_token
    }

    pub fn buy_token(&self) -> Option<Address> {
        self.buy_token
    }

    pub fn fields(&self) -> &OrderFields {
        &self.fields
    }

    pub(crate) fn resolve_buy_token(&mut self, token: Address) {
        self.buy_token = Some(token);
    }
}

impl From<OrderFields> for Order {
    fn from(fields: OrderFields) -> Self {
        Self {
            fields,
            buy_token: None,
        }
    }
}
