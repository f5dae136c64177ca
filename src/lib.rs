//! Decoder for packed ring-settlement submissions.
//!
//! A relayer packs everything a settlement needs into one flat buffer: a
//! header sizing each section, flag words gating optional fields, ring
//! participation bytes, and three value pools (addresses, 256-bit integers
//! and byte blobs). This crate walks that buffer once, left to right, and
//! returns the mining record, the orders and the rings, with each order's
//! buy token resolved from its ring predecessor.
//!
//! ```no_run
//! # fn main() -> Result<(), ring_codec::DecodeError> {
//! let hex = std::fs::read_to_string("submission.hex").unwrap_or_default();
//! let decoded = ring_codec::deserialize_hex(&hex)?;
//! for ring in &decoded.rings {
//!     for &index in ring.order_indices() {
//!         let order = &decoded.orders[index];
//!         println!("{} -> {:?}", order.sell_token(), order.buy_token());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod decode;
pub mod errors;
pub mod header;
pub mod pool;
pub mod ser;
pub mod types;

pub use config::{DecoderLimits, LIMITS_STANDARD, LIMITS_UNBOUNDED};
pub use decode::{deserialize, deserialize_hex, DecodeContext, ExchangeDeserializer};
pub use errors::{DecodeError, DecodeResult};
pub use types::{Decoded, Mining, Order, OrderFields, Ring};
