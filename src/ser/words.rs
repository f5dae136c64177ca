use alloy_primitives::{Address, U256};

use super::cursor::ByteReader;
use super::error::{SerKind, SerResult};

/// Width of one address pool entry.
pub const ADDRESS_SIZE: usize = 20;

/// Width of one integer pool entry (a big-endian EVM word).
pub const UINT_SIZE: usize = 32;

/// Reads a 20-byte address.
pub fn read_address(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<Address> {
    cursor
        .read_array::<ADDRESS_SIZE>(kind, field)
        .map(Address::from)
}

/// Reads a 32-byte big-endian unsigned integer at full precision.
pub fn read_uint256(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
) -> SerResult<U256> {
    cursor
        .read_array::<UINT_SIZE>(kind, field)
        .map(U256::from_be_bytes)
}
