//! Value pools and the per-decode cursors that drain them.
//!
//! After the participation entries a submission carries three contiguous
//! pools, always in this order:
//!
//! | Pool | Entry width | Entry type |
//! |------|-------------|------------|
//! | addresses | 20 bytes | [`Address`](alloy_primitives::Address) |
//! | uints | 32 bytes, big-endian | [`U256`](alloy_primitives::U256) |
//! | blobs | header-declared | [`Bytes`](alloy_primitives::Bytes) |
//!
//! Pools are extracted once and then consumed strictly front to back. A
//! decode must consume every pool exactly; [`PoolCursor::finish`] enforces
//! that.

mod cursor;
mod store;

pub use cursor::{PoolCursor, PoolUsage};
pub use store::{PoolKind, PoolValue, Pools};
