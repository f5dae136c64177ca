//! Single-pass decoding of a submission buffer.
//!
//! The pipeline runs header → mining → orders → rings over one buffer with
//! no backtracking. All mutable state (the byte reader and the pool cursors)
//! lives in a [`DecodeContext`] created per call, so one
//! [`ExchangeDeserializer`] can serve any number of threads.

mod batch;
mod mining;
mod order;
mod ring;

pub use batch::{batches_run_in_parallel, force_sequential_batches, SequentialBatches};
pub use mining::decode_mining;
pub use order::{decode_order, decode_orders};
pub use ring::{assemble_ring, assemble_rings};

use tracing::{debug, debug_span};

use crate::config::{DecoderLimits, LIMITS_UNBOUNDED};
use crate::errors::{DecodeError, DecodeResult};
use crate::header::{read_header, SubmissionHeader};
use crate::pool::{PoolCursor, Pools};
use crate::ser::{ensure_consumed, ByteReader, SerKind};
use crate::types::{Decoded, Order};

/// Per-call decoder state: the parsed header and fresh pool cursors.
#[derive(Debug)]
pub struct DecodeContext {
    header: SubmissionHeader,
    pools: PoolCursor,
}

impl DecodeContext {
    /// Parses the header and extracts the pools. The whole buffer must be
    /// accounted for by the header.
    pub fn open(bytes: &[u8], limits: &DecoderLimits) -> DecodeResult<Self> {
        let max = limits.max_buffer_bytes as usize;
        if bytes.len() > max {
            return Err(DecodeError::LimitExceeded {
                limit: "buffer bytes",
                max,
                got: bytes.len(),
            });
        }

        let mut reader = ByteReader::new(bytes);
        let header = read_header(&mut reader, limits)?;
        let pools = Pools::read(&mut reader, &header.layout)?;
        ensure_consumed(&reader, SerKind::BlobPool)?;
        debug!(
            orders = header.layout.order_count,
            rings = header.layout.ring_count(),
            addresses = header.layout.address_count,
            uints = header.layout.uint_count,
            blobs = header.layout.blob_count(),
            "submission header parsed"
        );

        Ok(Self {
            header,
            pools: pools.into_cursor(),
        })
    }

    pub fn header(&self) -> &SubmissionHeader {
        &self.header
    }

    /// Runs the mining, order and ring steps and checks that every pool was
    /// consumed exactly.
    pub fn run(mut self) -> DecodeResult<Decoded> {
        let mining = decode_mining(self.header.mining, &mut self.pools)?;
        let mut orders: Vec<Order> = decode_orders(&self.header.orders, &mut self.pools)?
            .into_iter()
            .map(Order::from)
            .collect();
        let pool_usage = self.pools.finish()?;
        let rings = assemble_rings(&self.header.rings, &mut orders)?;

        debug!(?pool_usage, rings = rings.len(), "submission decoded");
        Ok(Decoded {
            mining,
            orders,
            rings,
            pool_usage,
        })
    }
}

/// Stateless decoder configured with resource limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeDeserializer {
    limits: DecoderLimits,
}

impl ExchangeDeserializer {
    pub fn new(limits: DecoderLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &DecoderLimits {
        &self.limits
    }

    /// Decodes one raw submission buffer.
    pub fn deserialize(&self, bytes: &[u8]) -> DecodeResult<Decoded> {
        let span = debug_span!("deserialize", len = bytes.len());
        let _guard = span.enter();
        DecodeContext::open(bytes, &self.limits)?.run()
    }

    /// Decodes a hex-encoded submission, with or without a `0x` prefix.
    /// Surrounding whitespace is ignored.
    pub fn deserialize_hex(&self, input: &str) -> DecodeResult<Decoded> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let bytes = hex::decode(digits)?;
        self.deserialize(&bytes)
    }

    /// Decodes independent buffers, each with its own context. Results are
    /// returned in input order; one failing buffer does not affect others.
    pub fn deserialize_batch<B>(&self, buffers: &[B]) -> Vec<DecodeResult<Decoded>>
    where
        B: AsRef<[u8]> + Sync,
    {
        batch::decode_batch(self, buffers)
    }
}

/// Accepts anything the wire format can express.
impl Default for ExchangeDeserializer {
    fn default() -> Self {
        Self::new(LIMITS_UNBOUNDED)
    }
}

/// Decodes `bytes` bounded only by the wire format ([`LIMITS_UNBOUNDED`]).
pub fn deserialize(bytes: &[u8]) -> DecodeResult<Decoded> {
    ExchangeDeserializer::default().deserialize(bytes)
}

/// Decodes hex `input` with [`LIMITS_UNBOUNDED`].
pub fn deserialize_hex(input: &str) -> DecodeResult<Decoded> {
    ExchangeDeserializer::default().deserialize_hex(input)
}
