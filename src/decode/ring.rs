use core::iter;

use tracing::trace;

use crate::errors::{DecodeError, DecodeResult};
use crate::header::Participation;
use crate::types::{check_size, Order, Ring};

/// Builds ring `position` from its participation entries and resolves the
/// buy token of every order it references.
///
/// Each slot buys what its predecessor sells, and the first slot buys what
/// the last slot sells, closing the cycle. Slots are resolved from the
/// second to the last and the first slot is written last, so when an order
/// repeats inside a ring the closing assignment wins.
pub fn assemble_ring(
    position: usize,
    entries: &[Participation],
    orders: &mut [Order],
) -> DecodeResult<Ring> {
    check_size(position, entries.len())?;

    let order_count = orders.len();
    let indices = entries
        .iter()
        .enumerate()
        .map(|(slot, entry)| {
            let index = entry.order_index();
            if index < order_count {
                Ok(index)
            } else {
                Err(DecodeError::OrderIndexOutOfRange {
                    ring: position,
                    slot,
                    index,
                    order_count,
                })
            }
        })
        .collect::<DecodeResult<Vec<_>>>()?;
    let ring = Ring::new(position, indices)?;

    for slot in (1..ring.len()).chain(iter::once(0)) {
        let (Some(&index), Some(predecessor)) =
            (ring.order_indices().get(slot), ring.predecessor(slot))
        else {
            continue;
        };
        let token = orders[predecessor].sell_token();
        orders[index].resolve_buy_token(token);
    }
    trace!(position, indices = ?ring.order_indices(), "ring assembled");
    Ok(ring)
}

/// Assembles every ring in order over the shared order collection.
pub fn assemble_rings(
    rings: &[Vec<Participation>],
    orders: &mut [Order],
) -> DecodeResult<Vec<Ring>> {
    rings
        .iter()
        .enumerate()
        .map(|(position, entries)| assemble_ring(position, entries, orders))
        .collect()
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{Address, U256};

    use super::*;
    use crate::types::OrderFields;

    fn token(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn orders(sell_tokens: &[u8]) -> Vec<Order> {
        sell_tokens
            .iter()
            .map(|byte| {
                Order::from(OrderFields::new(
                    Address::ZERO,
                    token(*byte),
                    U256::ZERO,
                    U256::ZERO,
                    U256::ZERO,
                ))
            })
            .collect()
    }

    fn entries(indices: &[u8]) -> Vec<Participation> {
        indices.iter().copied().map(Participation::new).collect()
    }

    #[test]
    fn two_cycle_swaps_tokens() {
        let mut orders = orders(&[1, 2]);
        let ring = assemble_ring(0, &entries(&[0, 1]), &mut orders).unwrap();
        assert_eq!(ring.order_indices(), &[0, 1]);
        assert_eq!(orders[0].buy_token(), Some(token(2)));
        assert_eq!(orders[1].buy_token(), Some(token(1)));
    }

    #[test]
    fn three_cycle_follows_predecessor() {
        let mut orders = orders(&[1, 2, 3, 4]);
        assemble_ring(0, &entries(&[2, 0, 3]), &mut orders).unwrap();
        assert_eq!(orders[2].buy_token(), Some(token(4)));
        assert_eq!(orders[0].buy_token(), Some(token(3)));
        assert_eq!(orders[3].buy_token(), Some(token(1)));
        assert_eq!(orders[1].buy_token(), None);
    }

    #[test]
    fn repeated_order_takes_closing_token() {
        let mut orders = orders(&[1, 2]);
        assemble_ring(0, &entries(&[0, 1, 0]), &mut orders).unwrap();
        assert_eq!(orders[0].buy_token(), Some(token(1)));
        assert_eq!(orders[1].buy_token(), Some(token(1)));
    }

    #[test]
    fn bad_sizes_are_rejected() {
        let mut orders = orders(&[1; 9]);
        for size in [0u8, 1, 9] {
            let indices: Vec<u8> = (0..size).collect();
            let err = assemble_ring(3, &entries(&indices), &mut orders).unwrap_err();
            assert_eq!(
                err,
                DecodeError::BadRingSize {
                    ring: 3,
                    size: size as usize
                }
            );
        }
        assert!(orders.iter().all(|order| order.buy_token().is_none()));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut orders = orders(&[1, 2]);
        let err = assemble_ring(1, &entries(&[0, 5]), &mut orders).unwrap_err();
        assert_eq!(
            err,
            DecodeError::OrderIndexOutOfRange {
                ring: 1,
                slot: 1,
                index: 5,
                order_count: 2
            }
        );
        assert_eq!(orders[0].buy_token(), None);
    }
}
