//! Plaintext data types for the dark book
//!
//! These are the values clients and operators actually see: the orders a
//! client submits, the transactions the book reveals, and the receipt of a
//! submission round. Inside the book, orders live as backend values (see
//! [`SecretOrder`](crate::oblivious::SecretOrder)).
//!
//! ## Types
//!
//! - [`LimitOrder`]: A client order (price, quantity, side)
//! - [`Side`]: Ask or Bid
//! - [`Transaction`]: A revealed settlement (price, quantity)
//! - [`SettlementReceipt`]: Round summary with a running log root

mod order;
mod receipt;
mod transaction;

pub use order::{LimitOrder, Side, SIDE_ASK, SIDE_BID, SIDE_NULL};
pub use receipt::{SettlementReceipt, GENESIS_ROOT};
pub use transaction::Transaction;
