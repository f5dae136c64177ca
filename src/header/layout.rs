use core::ops::Range;

use tracing::trace;

use super::flags::{MiningFlags, OrderFlags, Participation};
use crate::config::DecoderLimits;
use crate::errors::{DecodeError, DecodeResult};
use crate::ser::{
    read_exact_bytes, read_u16, read_u16_words, ByteReader, SerError, SerKind, ADDRESS_SIZE,
    UINT_SIZE,
};

/// Fixed words preceding the variable ring-size and blob-length runs.
const FIXED_WORDS: usize = 5;

/// Section sizes declared by the header words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub order_count: usize,
    pub ring_sizes: Vec<usize>,
    pub address_count: usize,
    pub uint_count: usize,
    pub blob_lengths: Vec<usize>,
}

impl HeaderLayout {
    /// Interprets the raw header words. The word count must match exactly
    /// the count implied by the ring and blob totals it declares.
    pub fn from_words(words: &[u16]) -> DecodeResult<Self> {
        let declared = words.len();
        let word = |index: usize, expected: usize| -> DecodeResult<usize> {
            words
                .get(index)
                .map(|value| usize::from(*value))
                .ok_or(DecodeError::HeaderLengthMismatch { declared, expected })
        };

        let order_count = word(0, FIXED_WORDS)?;
        let ring_count = word(1, FIXED_WORDS)?;
        let pools_at = 2 + ring_count;
        let minimum = FIXED_WORDS + ring_count;
        let address_count = word(pools_at, minimum)?;
        let uint_count = word(pools_at + 1, minimum)?;
        let blob_count = word(pools_at + 2, minimum)?;

        let expected = minimum + blob_count;
        if declared != expected {
            return Err(DecodeError::HeaderLengthMismatch { declared, expected });
        }

        let widen = |run: &[u16]| run.iter().map(|value| usize::from(*value)).collect();
        Ok(Self {
            order_count,
            ring_sizes: widen(&words[2..pools_at]),
            address_count,
            uint_count,
            blob_lengths: widen(&words[minimum..]),
        })
    }

    pub fn ring_count(&self) -> usize {
        self.ring_sizes.len()
    }

    pub fn blob_count(&self) -> usize {
        self.blob_lengths.len()
    }

    /// Total number of participation bytes across all rings.
    pub fn participation_len(&self) -> DecodeResult<usize> {
        checked_sum(&self.ring_sizes, "ring_sizes")
    }

    /// Total byte length of the blob pool.
    pub fn blob_pool_len(&self) -> DecodeResult<usize> {
        checked_sum(&self.blob_lengths, "blob_lengths")
    }

    /// Rejects headers whose declared sizes breach `limits`.
    pub fn check_limits(&self, limits: &DecoderLimits) -> DecodeResult<()> {
        let pool_max = limits.max_pool_entries as usize;
        let checks = [
            ("orders", limits.max_orders as usize, self.order_count),
            ("rings", limits.max_rings as usize, self.ring_count()),
            ("address pool", pool_max, self.address_count),
            ("uint pool", pool_max, self.uint_count),
            ("blob pool", pool_max, self.blob_count()),
        ];
        for (limit, max, got) in checks {
            if got > max {
                return Err(DecodeError::LimitExceeded { limit, max, got });
            }
        }
        let blob_max = limits.max_blob_bytes as usize;
        if let Some(&got) = self.blob_lengths.iter().find(|len| **len > blob_max) {
            return Err(DecodeError::LimitExceeded {
                limit: "blob bytes",
                max: blob_max,
                got,
            });
        }
        Ok(())
    }

    /// Byte ranges of every section that follows the header words, given
    /// the offset of the mining flag word.
    pub fn regions(&self, start: usize) -> DecodeResult<RegionMap> {
        let overflow = || DecodeError::from(SerError::invalid_length(SerKind::Header, "regions"));
        let mut end = start;
        let mut next = |len: Option<usize>| -> DecodeResult<Range<usize>> {
            let from = end;
            end = len
                .and_then(|len| from.checked_add(len))
                .ok_or_else(overflow)?;
            Ok(from..end)
        };

        Ok(RegionMap {
            mining_flags: next(Some(2))?,
            order_flags: next(self.order_count.checked_mul(2))?,
            participation: next(Some(self.participation_len()?))?,
            addresses: next(self.address_count.checked_mul(ADDRESS_SIZE))?,
            uints: next(self.uint_count.checked_mul(UINT_SIZE))?,
            blobs: next(Some(self.blob_pool_len()?))?,
        })
    }
}

fn checked_sum(values: &[usize], field: &'static str) -> DecodeResult<usize> {
    values
        .iter()
        .try_fold(0usize, |acc, value| acc.checked_add(*value))
        .ok_or_else(|| SerError::invalid_length(SerKind::Header, field).into())
}

/// Absolute byte ranges of the sections after the header words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    pub mining_flags: Range<usize>,
    pub order_flags: Range<usize>,
    pub participation: Range<usize>,
    pub addresses: Range<usize>,
    pub uints: Range<usize>,
    pub blobs: Range<usize>,
}

impl RegionMap {
    /// Offset one past the final section; equals the buffer length for a
    /// well-formed submission.
    pub fn end(&self) -> usize {
        self.blobs.end
    }
}

/// Everything the decoder needs before touching the pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionHeader {
    pub layout: HeaderLayout,
    pub regions: RegionMap,
    pub mining: MiningFlags,
    pub orders: Vec<OrderFlags>,
    /// Participation entries grouped per ring, in ring order.
    pub rings: Vec<Vec<Participation>>,
}

/// Reads the header words, flag words and participation entries, leaving
/// `cursor` at the start of the address pool.
///
/// The buffer length is checked against the header before any section is
/// materialised, so truncated or padded buffers fail up front.
pub fn read_header(
    cursor: &mut ByteReader<'_>,
    limits: &DecoderLimits,
) -> DecodeResult<SubmissionHeader> {
    let word_count = read_u16(cursor, SerKind::Header, "header_len")?;
    let words = read_u16_words(cursor, usize::from(word_count), SerKind::Header, "header_words")?;
    let layout = HeaderLayout::from_words(&words)?;
    layout.check_limits(limits)?;

    let regions = layout.regions(cursor.position())?;
    let actual = cursor.position() + cursor.remaining();
    if regions.end() != actual {
        return Err(DecodeError::BufferLengthMismatch {
            expected: regions.end(),
            actual,
        });
    }
    trace!(?layout, "header words interpreted");

    let mining = MiningFlags::parse(read_u16(cursor, SerKind::MiningFlags, "mining_flags")?)?;

    let orders = read_u16_words(
        cursor,
        layout.order_count,
        SerKind::OrderFlags,
        "order_flags",
    )?
    .into_iter()
    .enumerate()
    .map(|(position, raw)| OrderFlags::parse(raw, position))
    .collect::<DecodeResult<Vec<_>>>()?;

    let mut entries = read_exact_bytes(
        cursor,
        SerKind::Participation,
        "entries",
        regions.participation.len(),
    )?;
    let mut rings = Vec::with_capacity(layout.ring_count());
    for &size in &layout.ring_sizes {
        let (ring, rest) = entries.split_at(size);
        rings.push(ring.iter().copied().map(Participation::new).collect());
        entries = rest;
    }

    Ok(SubmissionHeader {
        layout,
        regions,
        mining,
        orders,
        rings,
    })
}
