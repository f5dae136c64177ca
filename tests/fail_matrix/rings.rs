use insta::assert_snapshot;
use ring_codec::{deserialize, DecodeError};

use crate::baseline;

fn decode_with_rings(rings: Vec<Vec<u8>>) -> Result<ring_codec::Decoded, DecodeError> {
    let mut submission = baseline();
    submission.rings = rings;
    deserialize(&submission.encode())
}

#[test]
fn ring_of_one_is_rejected() {
    let err = decode_with_rings(vec![vec![0]]).expect_err("single-order ring");
    assert_eq!(err, DecodeError::BadRingSize { ring: 0, size: 1 });
    assert_snapshot!(err.to_string(), @"bad ring size: ring 0 has 1 participants");
}

#[test]
fn empty_ring_is_rejected() {
    let err = decode_with_rings(vec![vec![]]).expect_err("empty ring");
    assert_eq!(err, DecodeError::BadRingSize { ring: 0, size: 0 });
}

#[test]
fn ring_of_nine_is_rejected() {
    let err = decode_with_rings(vec![vec![0, 1, 0, 1, 0, 1, 0, 1, 0]]).expect_err("nine slots");
    assert_eq!(err, DecodeError::BadRingSize { ring: 0, size: 9 });
}

#[test]
fn later_bad_ring_fails_whole_decode() {
    let err = decode_with_rings(vec![vec![0, 1], vec![1]]).expect_err("second ring bad");
    assert_eq!(err, DecodeError::BadRingSize { ring: 1, size: 1 });
}

#[test]
fn boundary_sizes_are_accepted() {
    let two = decode_with_rings(vec![vec![1, 0]]).expect("ring of two");
    assert_eq!(two.rings[0].len(), 2);
    let eight = decode_with_rings(vec![vec![0, 1, 0, 1, 0, 1, 0, 1]]).expect("ring of eight");
    assert_eq!(eight.rings[0].len(), 8);
}

#[test]
fn order_index_out_of_range() {
    let err = decode_with_rings(vec![vec![0, 2]]).expect_err("order 2 does not exist");
    assert_eq!(
        err,
        DecodeError::OrderIndexOutOfRange {
            ring: 0,
            slot: 1,
            index: 2,
            order_count: 2
        }
    );
    assert_snapshot!(err.to_string(), @"ring 0 slot 1 references order 2 of 2");
}
