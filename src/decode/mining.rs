use tracing::trace;

use crate::errors::DecodeResult;
use crate::header::{MiningFlags, MINING_FIELD_TABLE};
use crate::pool::PoolCursor;
use crate::types::Mining;

/// Reads the mining record: fee recipient, then miner, then signature, each
/// consumed only when its flag is set.
pub fn decode_mining(flags: MiningFlags, pools: &mut PoolCursor) -> DecodeResult<Mining> {
    let mut mining = Mining::default();
    for rule in MINING_FIELD_TABLE.iter().filter(|rule| flags.has(rule)) {
        mining.assign(rule.field, pools.take(rule.pool)?)?;
    }
    trace!(flags = flags.raw(), "mining decoded");
    Ok(mining)
}
