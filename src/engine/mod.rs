//! Matching engine module for the dark book.
//!
//! ## Design Principles
//!
//! The engine is the caller-side collaborator of the oblivious book:
//!
//! 1. **Admission**: enforces the fixed capacity using public counts only
//! 2. **Rounds**: one submission plus a full settlement, never interleaved
//! 3. **Receipts**: every round closes with a receipt and a log root
//! 4. **Logging**: only public values (counts, revealed transactions)
//!
//! ## Example
//!
//! ```
//! use dark_book::engine::MatchingEngine;
//! use dark_book::oblivious::Plaintext;
//! use dark_book::types::{LimitOrder, Transaction};
//! use dark_book::EngineConfig;
//!
//! let mut engine = MatchingEngine::new(Plaintext, EngineConfig::with_capacity(6));
//!
//! engine.submit(&LimitOrder::bid(300, 2)).unwrap();
//! let outcome = engine.submit(&LimitOrder::ask(200, 8)).unwrap();
//!
//! assert_eq!(outcome.transactions, vec![Transaction::new(200, 2)]);
//! assert_eq!(outcome.receipt.round, 2);
//! ```

pub mod matcher;

pub use matcher::{MatchingEngine, RoundOutcome};
