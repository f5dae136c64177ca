//! Byte-level read primitives for packed submission buffers.
//!
//! Every multi-byte value in a submission is big-endian, matching the EVM
//! word order the relayer uses when packing. Readers never allocate unless
//! they hand out an owned blob, and every failure names the buffer section
//! and field that was being read.

mod bytes;
mod cursor;
mod error;
mod ints;
mod words;

pub use bytes::{ensure_consumed, read_blob, read_exact_bytes};
pub use cursor::ByteReader;
pub use error::{SerError, SerKind, SerResult};
pub use ints::{read_u16, read_u16_words, read_u8};
pub use words::{read_address, read_uint256, ADDRESS_SIZE, UINT_SIZE};
