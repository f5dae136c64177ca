use insta::assert_snapshot;
use ring_codec::errors::FlagWord;
use ring_codec::ser::{SerError, SerKind};
use ring_codec::{deserialize, DecodeError};

use crate::_fixtures::two_order_ring;
use crate::baseline;

#[test]
fn missing_header_length() {
    let err = deserialize(&[0x00]).expect_err("one byte cannot hold a header");
    assert_eq!(
        err,
        DecodeError::Ser(SerError::UnexpectedEnd {
            kind: SerKind::Header,
            field: "header_len",
            offset: 0,
        })
    );
    assert_snapshot!(err.to_string(), @"header: buffer ended reading `header_len` at offset 0");
}

#[test]
fn truncated_header_words() {
    let err = deserialize(&[0x00, 0x05, 0x00]).expect_err("header words cut short");
    assert_eq!(
        err,
        DecodeError::Ser(SerError::UnexpectedEnd {
            kind: SerKind::Header,
            field: "header_words",
            offset: 2,
        })
    );
}

#[test]
fn header_with_extra_word() {
    let submission = baseline();
    let mut words = submission.header_words();
    words.push(0);
    let err = deserialize(&submission.encode_with_header(&words)).expect_err("extra word");
    assert_eq!(
        err,
        DecodeError::HeaderLengthMismatch {
            declared: 7,
            expected: 6
        }
    );
    assert_eq!(err.section(), Some(SerKind::Header));
}

#[test]
fn truncated_buffer() {
    let bytes = &two_order_ring().bytes;
    let err = deserialize(&bytes[..bytes.len() - 1]).expect_err("truncated");
    assert_eq!(
        err,
        DecodeError::BufferLengthMismatch {
            expected: 294,
            actual: 293
        }
    );
    assert_snapshot!(err.to_string(), @"header implies a 294-byte buffer, got 293 bytes");
}

#[test]
fn trailing_byte() {
    let mut bytes = two_order_ring().bytes.clone();
    bytes.push(0);
    let err = deserialize(&bytes).expect_err("trailing byte");
    assert_eq!(
        err,
        DecodeError::BufferLengthMismatch {
            expected: 294,
            actual: 295
        }
    );
}

#[test]
fn undefined_order_flag_bit() {
    let mut submission = baseline();
    submission.order_flags[1] |= 1 << 12;
    let err = deserialize(&submission.encode()).expect_err("bit 12 is undefined");
    assert_eq!(
        err,
        DecodeError::UndefinedFlagBits {
            word: FlagWord::Order(1),
            bits: 0x1000
        }
    );
    assert_eq!(err.section(), Some(SerKind::OrderFlags));
    assert_snapshot!(err.to_string(), @"flag word of order 1 sets undefined bits 0x1000");
}

#[test]
fn undefined_mining_flag_bit() {
    let mut submission = baseline();
    submission.mining_flags = 1 << 3;
    let err = deserialize(&submission.encode()).expect_err("bit 3 is undefined");
    assert_eq!(
        err,
        DecodeError::UndefinedFlagBits {
            word: FlagWord::Mining,
            bits: 0x0008
        }
    );
}
