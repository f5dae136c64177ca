use serde::{Deserialize, Serialize};

use super::{Mining, Order, Ring};
use crate::pool::PoolUsage;

/// Complete result of one decode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decoded {
    pub mining: Mining,
    pub orders: Vec<Order>,
    pub rings: Vec<Ring>,
    /// Pool values consumed; equal to the declared pool sizes.
    pub pool_usage: PoolUsage,
}

impl Decoded {
    /// Splits the result into the mining record, orders and rings.
    pub fn into_parts(self) -> (Mining, Vec<Order>, Vec<Ring>) {
        (self.mining, self.orders, self.rings)
    }
}
