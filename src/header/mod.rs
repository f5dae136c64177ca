//! Header and flag-word interpretation.
//!
//! A submission opens with a length-prefixed run of `u16` header words that
//! size every later section, followed by the mining flag word, one flag word
//! per order and the ring participation bytes:
//!
//! ```text
//! +---------------------------+------------------------------------------+
//! | Section                   | Encoding                                 |
//! +===========================+==========================================+
//! | header length L           | u16                                      |
//! | header words              | L x u16                                  |
//! |   W[0]                    | order count N                            |
//! |   W[1]                    | ring count R                             |
//! |   W[2 .. 2+R]             | participants per ring                    |
//! |   W[2+R]                  | address pool size                        |
//! |   W[3+R]                  | uint pool size                           |
//! |   W[4+R]                  | blob pool size B                         |
//! |   W[5+R .. 5+R+B]         | byte length of each blob                 |
//! | mining flags              | u16                                      |
//! | order flags               | N x u16                                  |
//! | participation entries     | (sum of ring sizes) x u8                 |
//! +---------------------------+------------------------------------------+
//! ```
//!
//! The pools follow immediately; see [`crate::pool`].

mod flags;
mod layout;

pub use flags::{
    FieldRule, MiningField, MiningFlags, OrderField, OrderFlags, Participation,
    ALL_OR_NONE_BIT, MINING_FIELD_TABLE, ORDER_FIELD_TABLE,
};
pub use layout::{read_header, HeaderLayout, RegionMap, SubmissionHeader};
