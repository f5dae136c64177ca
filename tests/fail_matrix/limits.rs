use ring_codec::config::{DecoderLimitsBuilder, LimitsProfile};
use ring_codec::{deserialize_hex, DecodeError, ExchangeDeserializer};

use crate::_fixtures::two_order_ring;

#[test]
fn order_limit() {
    let limits = DecoderLimitsBuilder::new()
        .max_orders(1)
        .max_rings(0)
        .build()
        .expect("valid limits");
    let err = ExchangeDeserializer::new(limits)
        .deserialize(&two_order_ring().bytes)
        .expect_err("two orders over limit");
    assert_eq!(
        err,
        DecodeError::LimitExceeded {
            limit: "orders",
            max: 1,
            got: 2
        }
    );
}

#[test]
fn buffer_limit() {
    let limits = DecoderLimitsBuilder::new()
        .max_buffer_bytes(100)
        .build()
        .expect("valid limits");
    let err = ExchangeDeserializer::new(limits)
        .deserialize(&two_order_ring().bytes)
        .expect_err("buffer over limit");
    assert_eq!(
        err,
        DecodeError::LimitExceeded {
            limit: "buffer bytes",
            max: 100,
            got: 294
        }
    );
}

#[test]
fn pool_entry_limit() {
    let limits = DecoderLimitsBuilder::from_profile(LimitsProfile::Unbounded)
        .max_pool_entries(5)
        .build()
        .expect("valid limits");
    let err = ExchangeDeserializer::new(limits)
        .deserialize(&two_order_ring().bytes)
        .expect_err("six uints over limit");
    assert_eq!(
        err,
        DecodeError::LimitExceeded {
            limit: "uint pool",
            max: 5,
            got: 6
        }
    );
}

#[test]
fn invalid_hex() {
    assert!(matches!(
        deserialize_hex("0xzz"),
        Err(DecodeError::InvalidHex(hex::FromHexError::InvalidHexCharacter { .. }))
    ));
    assert!(matches!(
        deserialize_hex("0x123"),
        Err(DecodeError::InvalidHex(hex::FromHexError::OddLength))
    ));
}
