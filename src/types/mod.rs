//! Decoded entities handed back to the caller.
//!
//! Orders are built in two stages: the order decoder produces immutable
//! [`OrderFields`], and ring assembly wraps them into [`Order`] values whose
//! buy token is resolved from the ring they sit in. An order no ring
//! references keeps `buy_token == None`.

mod decoded;
mod mining;
mod order;
mod ring;

pub use decoded::Decoded;
pub use mining::Mining;
pub use order::{Order, OrderFields};
pub(crate) use ring::check_size;
pub use ring::{Ring, MAX_RING_SIZE, MIN_RING_SIZE};
