use tracing::trace;

use crate::errors::DecodeResult;
use crate::header::OrderFlags;
use crate::pool::PoolCursor;
use crate::types::OrderFields;

/// Reads one order.
///
/// The mandatory prefix is always owner, sell token, sell amount, buy amount
/// and fee amount. Optional fields follow in
/// [`ORDER_FIELD_TABLE`](crate::header::ORDER_FIELD_TABLE) order; a clear bit
/// skips its pool read entirely. The buy token is not part of the buffer.
pub fn decode_order(flags: OrderFlags, pools: &mut PoolCursor) -> DecodeResult<OrderFields> {
    let owner = pools.next_address()?;
    let sell_token = pools.next_address()?;
    let sell_amount = pools.next_uint()?;
    let buy_amount = pools.next_uint()?;
    let fee_amount = pools.next_uint()?;

    let mut fields = OrderFields::new(owner, sell_token, sell_amount, buy_amount, fee_amount);
    for rule in flags.present() {
        fields.assign(rule.field, pools.take(rule.pool)?)?;
    }
    fields.all_or_none = flags.all_or_none();
    Ok(fields)
}

/// Reads one order per flag word, in flag order.
pub fn decode_orders(flags: &[OrderFlags], pools: &mut PoolCursor) -> DecodeResult<Vec<OrderFields>> {
    flags
        .iter()
        .enumerate()
        .map(|(position, flags)| {
            let fields = decode_order(*flags, pools)?;
            trace!(position, flags = flags.raw(), owner = %fields.owner, "order decoded");
            Ok(fields)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, Bytes, U256};

    use super::*;
    use crate::errors::DecodeError;
    use crate::pool::{PoolKind, PoolUsage, Pools};

    fn addr(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn uint(value: u64) -> U256 {
        U256::from(value)
    }

    #[test]
    fn wallet_and_valid_until_only() {
        let flags = OrderFlags::parse((1 << 3) | (1 << 5), 0).unwrap();
        let mut pools = Pools {
            addresses: vec![addr(1), addr(2), addr(3)],
            uints: vec![uint(10), uint(20), uint(30), uint(40)],
            blobs: Vec::new(),
        }
        .into_cursor();

        let order = decode_order(flags, &mut pools).unwrap();
        assert_eq!(order.owner, addr(1));
        assert_eq!(order.sell_token, addr(2));
        assert_eq!(order.sell_amount, uint(10));
        assert_eq!(order.buy_amount, uint(20));
        assert_eq!(order.fee_amount, uint(30));
        assert_eq!(order.wallet, Some(addr(3)));
        assert_eq!(order.valid_until, Some(uint(40)));
        assert_eq!(order.dual_auth, None);
        assert_eq!(order.broker, None);
        assert_eq!(order.order_interceptor, None);
        assert_eq!(order.valid_since, None);
        assert_eq!(order.signature, None);
        assert_eq!(order.dual_auth_signature, None);
        assert!(!order.all_or_none);
        assert_eq!(
            pools.finish().unwrap(),
            PoolUsage {
                addresses: 3,
                uints: 4,
                blobs: 0
            }
        );
    }

    #[test]
    fn every_flag_set() {
        let flags = OrderFlags::parse(0x01ff, 0).unwrap();
        let mut pools = Pools {
            addresses: (1..=6).map(addr).collect(),
            uints: (1..=5).map(uint).collect(),
            blobs: vec![Bytes::from_static(b"s"), Bytes::from_static(b"d")],
        }
        .into_cursor();

        let order = decode_order(flags, &mut pools).unwrap();
        assert_eq!(order.dual_auth, Some(addr(3)));
        assert_eq!(order.broker, Some(addr(4)));
        assert_eq!(order.order_interceptor, Some(addr(5)));
        assert_eq!(order.wallet, Some(addr(6)));
        assert_eq!(order.valid_since, Some(uint(4)));
        assert_eq!(order.valid_until, Some(uint(5)));
        assert_eq!(order.signature, Some(Bytes::from_static(b"s")));
        assert_eq!(order.dual_auth_signature, Some(Bytes::from_static(b"d")));
        assert!(order.all_or_none);
        assert!(pools.finish().is_ok());
    }

    #[test]
    fn missing_mandatory_value_exhausts_pool() {
        let mut pools = Pools {
            addresses: vec![addr(1), addr(2)],
            uints: vec![uint(1), uint(2)],
            blobs: Vec::new(),
        }
        .into_cursor();
        let err = decode_order(OrderFlags::default(), &mut pools).unwrap_err();
        assert_eq!(
            err,
            DecodeError::PoolExhausted {
                pool: PoolKind::Uint,
                declared: 2
            }
        );
    }
}
