
#[path = "fail_matrix/header.rs"]
mod header;
#[path = "fail_matrix/limits.rs"]
mod limits;
#[path = "fail_matrix/pools.rs"]
mod pools;
#[path = "fail_matrix/rings.rs"]
mod rings;

use _fixtures::{two_order_ring, Submission};

/// Section view of the two-order ring fixture, ready to be corrupted.
pub fn baseline() -> Submission {
    let fixture = two_order_ring();
    Submission::from_parts(&fixture.mining, &fixture.orders, &fixture.rings)
}
