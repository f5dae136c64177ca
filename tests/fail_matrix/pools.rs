use alloy_primitives::U256;
use insta::assert_snapshot;
use ring_codec::pool::PoolKind;
use ring_codec::ser::SerKind;
use ring_codec::{deserialize, DecodeError};

use crate::baseline;

#[test]
fn flag_without_value_exhausts_address_pool() {
    let mut submission = baseline();
    // Broker bit on the first order without a broker address in the pool.
    submission.order_flags[0] |= 1 << 1;
    let err = deserialize(&submission.encode()).expect_err("address pool too small");
    assert_eq!(
        err,
        DecodeError::PoolExhausted {
            pool: PoolKind::Address,
            declared: 4
        }
    );
    assert_eq!(err.section(), Some(SerKind::AddressPool));
    assert_snapshot!(err.to_string(), @"address pool exhausted after 4 values");
}

#[test]
fn signature_flag_without_blob_exhausts_blob_pool() {
    let mut submission = baseline();
    submission.order_flags[1] |= 1 << 7;
    let err = deserialize(&submission.encode()).expect_err("blob pool empty");
    assert_eq!(
        err,
        DecodeError::PoolExhausted {
            pool: PoolKind::Blob,
            declared: 0
        }
    );
}

#[test]
fn unused_uint_is_an_under_read() {
    let mut submission = baseline();
    submission.uints.push(U256::from(42u64));
    let err = deserialize(&submission.encode()).expect_err("extra uint");
    assert_eq!(
        err,
        DecodeError::PoolUnderRead {
            pool: PoolKind::Uint,
            declared: 7,
            consumed: 6
        }
    );
    assert_snapshot!(err.to_string(), @"uint pool declares 7 values but only 6 were used");
}

#[test]
fn cleared_flag_leaves_value_unread() {
    let mut submission = baseline();
    submission.order_flags[0] |= 1 << 5;
    submission.uints.insert(3, U256::from(9u64));
    assert!(deserialize(&submission.encode()).is_ok());

    submission.order_flags[0] &= !(1 << 5);
    let err = deserialize(&submission.encode()).expect_err("valid-until value left over");
    assert!(matches!(
        err,
        DecodeError::PoolUnderRead {
            pool: PoolKind::Uint,
            ..
        }
    ));
}
