//! # Dark Book
//!
//! An oblivious order-matching engine. The book's control flow never depends
//! on the prices, quantities or sides it holds, so its matching logic can
//! run over encrypted or secret-shared values as well as plain integers.
//!
//! ## Architecture
//!
//! - **Oblivious**: the primitive backend trait and order-level selection
//! - **OrderBook**: fixed-capacity sorted containers and settlement
//! - **Engine**: admission control, rounds, receipts
//! - **Sim**: seeded order logs and the simulated log (demonstration only)
//!
//! ## Design Principles
//!
//! 1. **No secret branches**: every conditional is a backend `select`
//! 2. **Fixed reveals**: one boolean per match attempt, two integers per match
//! 3. **Fixed capacity**: slots are allocated once; full scans, no trees
//! 4. **Synchronous**: a round runs to completion before the next begins

// ============================================================================
// Module declarations
// ============================================================================

/// Plaintext types: LimitOrder, Transaction, SettlementReceipt
pub mod types;

/// Primitive backend and record selection
pub mod oblivious;

/// Oblivious containers and the order book
pub mod orderbook;

/// Session engine: admission and rounds
pub mod engine;

/// Demonstration harness
pub mod sim;

pub mod config;
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::EngineConfig;
pub use engine::{MatchingEngine, RoundOutcome};
pub use error::{BookError, Result};
pub use oblivious::{Backend, Plaintext, SecretOrder};
pub use orderbook::{BookSnapshot, OrderBook};
pub use types::{LimitOrder, SettlementReceipt, Side, Transaction};
