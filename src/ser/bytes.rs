use alloy_primitives::Bytes;

use super::cursor::ByteReader;
use super::error::{SerError, SerKind, SerResult};

/// Borrows a fixed-length slice, erroring if the buffer is shorter.
pub fn read_exact_bytes<'a>(
    cursor: &mut ByteReader<'a>,
    kind: SerKind,
    field: &'static str,
    len: usize,
) -> SerResult<&'a [u8]> {
    cursor.read_exact(len, kind, field)
}

/// Reads an owned blob whose length is known up front.
pub fn read_blob(
    cursor: &mut ByteReader<'_>,
    kind: SerKind,
    field: &'static str,
    len: usize,
) -> SerResult<Bytes> {
    let slice = cursor.read_exact(len, kind, field)?;
    Ok(Bytes::copy_from_slice(slice))
}

/// Fails with a trailing-bytes error unless the reader is exhausted.
pub fn ensure_consumed(cursor: &ByteReader<'_>, kind: SerKind) -> SerResult<()> {
    let remaining = cursor.remaining();
    if remaining == 0 {
        Ok(())
    } else {
        Err(SerError::trailing_bytes(kind, cursor.position(), remaining))
    }
}
