//! Batch decoding over independent submission buffers.
//!
//! Every buffer gets its own [`DecodeContext`](super::DecodeContext), so
//! buffers never share pool state and one failure cannot leak into another
//! result. With the `parallel` feature the batch is spread over the rayon
//! pool unless a [`SequentialBatches`] guard is alive.

#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicBool, Ordering};

use super::ExchangeDeserializer;
use crate::errors::DecodeResult;
use crate::types::Decoded;

#[cfg(feature = "parallel")]
static SEQUENTIAL: AtomicBool = AtomicBool::new(false);

/// Fewest buffers a rayon task decodes. A submission decodes in
/// microseconds, so splitting finer costs more than it saves.
#[cfg(feature = "parallel")]
const MIN_BUFFERS_PER_TASK: usize = 4;

#[cfg(feature = "parallel")]
fn min_task_len(batch_len: usize) -> usize {
    MIN_BUFFERS_PER_TASK.min(batch_len.max(1))
}

/// Returns `true` when batches fan out over the rayon pool.
pub fn batches_run_in_parallel() -> bool {
    #[cfg(feature = "parallel")]
    {
        !SEQUENTIAL.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "parallel"))]
    {
        false
    }
}

/// Forces every batch onto the calling thread until the returned guard
/// drops. Nested guards restore the mode that was active before them.
pub fn force_sequential_batches() -> SequentialBatches {
    #[cfg(feature = "parallel")]
    {
        SequentialBatches {
            was_sequential: SEQUENTIAL.swap(true, Ordering::SeqCst),
        }
    }
    #[cfg(not(feature = "parallel"))]
    {
        SequentialBatches {}
    }
}

/// Keeps batch decoding sequential while alive.
#[must_use = "batches go back to parallel as soon as the guard drops"]
#[derive(Debug)]
pub struct SequentialBatches {
    #[cfg(feature = "parallel")]
    was_sequential: bool,
}

#[cfg(feature = "parallel")]
impl Drop for SequentialBatches {
    fn drop(&mut self) {
        SEQUENTIAL.store(self.was_sequential, Ordering::SeqCst);
    }
}

pub(super) fn decode_batch<B>(
    deserializer: &ExchangeDeserializer,
    buffers: &[B],
) -> Vec<DecodeResult<Decoded>>
where
    B: AsRef<[u8]> + Sync,
{
    let decode = |buffer: &B| deserializer.deserialize(buffer.as_ref());

    #[cfg(feature = "parallel")]
    let results: Vec<DecodeResult<Decoded>> = if batches_run_in_parallel() {
        use rayon::prelude::*;
        buffers
            .par_iter()
            .with_min_len(min_task_len(buffers.len()))
            .map(decode)
            .collect()
    } else {
        buffers.iter().map(decode).collect()
    };
    #[cfg(not(feature = "parallel"))]
    let results: Vec<DecodeResult<Decoded>> = buffers.iter().map(decode).collect();

    results
}
