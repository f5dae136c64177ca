use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};

/// Reads a single byte.
pub fn read_u8(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u8> {
    Ok(cursor.read_array::<1>(kind, field)?[0])
}

/// Reads a big-endian `u16`.
pub fn read_u16(cursor: &mut ByteReader<'_>, kind: SerKind, field: &'static str) -> SerResult<u16> {
    let bytes = cursor.read_array::<2>(kind, field)?;
    Ok(u16::from_be_bytes(bytes))
}

/// Reads `count` consecutive big-endian `u16` words.
///
/// The full region is bounds-checked before any word is decoded so a bogus
/// count cannot trigger a large allocation.
pub fn read_u16_words(
    cursor: &mut ByteReader<'_>,
    count: usize,
    kind: SerKind,
    field: &'static str,
) -> SerResult<Vec<u16>> {
    let len = count
        .checked_mul(2)
        .ok_or_else(|| SerError::invalid_length(kind, field))?;
    let region = cursor.read_exact(len, kind, field)?;
    Ok(region
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .collect())
}
