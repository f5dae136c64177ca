use serde::{Deserialize, Serialize};

use crate::errors::{DecodeError, DecodeResult};

/// Fewest orders a ring may hold.
pub const MIN_RING_SIZE: usize = 2;

/// Most orders a ring may hold.
pub const MAX_RING_SIZE: usize = 8;

/// Ordered order indices forming one settlement cycle.
///
/// Token flow runs from each slot to the next and wraps from the last slot
/// back to the first. Repeated indices are not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ring {
    order_indices: Vec<usize>,
}

impl Ring {
    /// Builds a ring, rejecting sizes outside `MIN_RING_SIZE..=MAX_RING_SIZE`.
    /// `ring` is the ring's position, used for error reporting.
    pub fn new(ring: usize, order_indices: Vec<usize>) -> DecodeResult<Self> {
        check_size(ring, order_indices.len())?;
        Ok(Self { order_indices })
    }

    pub fn order_indices(&self) -> &[usize] {
        &self.order_indices
    }

    pub fn len(&self) -> usize {
        self.order_indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order_indices.is_empty()
    }

    /// Index of the order preceding `slot`, wrapping at the start.
    pub fn predecessor(&self, slot: usize) -> Option<usize> {
        let len = self.len();
        if slot >= len {
            return None;
        }
        Some(self.order_indices[(slot + len - 1) % len])
    }
}

pub(crate) fn check_size(ring: usize, size: usize) -> DecodeResult<()> {
    if (MIN_RING_SIZE..=MAX_RING_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(DecodeError::BadRingSize { ring, size })
    }
}
