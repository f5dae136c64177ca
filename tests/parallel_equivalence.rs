#![cfg(feature = "parallel")]


use _fixtures::{encode, plain_order, two_order_ring};
use ring_codec::decode::{batches_run_in_parallel, force_sequential_batches};
use ring_codec::{ExchangeDeserializer, Mining};

fn batch() -> Vec<Vec<u8>> {
    let mut buffers = Vec::new();
    for n in 2..12u8 {
        let orders: Vec<_> = (0..n).map(|i| plain_order(i, 0x10 + i)).collect();
        let ring: Vec<u8> = (0..n.min(8)).rev().collect();
        buffers.push(encode(&Mining::default(), &orders, &[ring]));
    }
    let mut truncated = two_order_ring().bytes.clone();
    truncated.pop();
    buffers.push(truncated);
    buffers
}

#[test]
fn batch_parallel_matches_sequential() {
    let buffers = batch();
    let deserializer = ExchangeDeserializer::default();

    let baseline = {
        let _guard = force_sequential_batches();
        assert!(!batches_run_in_parallel());
        deserializer.deserialize_batch(&buffers)
    };
    let parallel = deserializer.deserialize_batch(&buffers);

    assert_eq!(baseline.len(), buffers.len());
    assert_eq!(baseline, parallel);
    assert!(parallel.last().is_some_and(|result| result.is_err()));
}

#[test]
fn batch_matches_single_decodes() {
    let buffers = batch();
    let deserializer = ExchangeDeserializer::default();
    let singles: Vec<_> = buffers
        .iter()
        .map(|buffer| deserializer.deserialize(buffer))
        .collect();
    assert_eq!(deserializer.deserialize_batch(&buffers), singles);
}
