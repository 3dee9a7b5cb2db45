//! Session engine: capacity admission, rounds, receipts.

use tracing::{debug, error, info, warn};

use crate::config::EngineConfig;
use crate::error::{BookError, Result};
use crate::oblivious::{Backend, SecretOrder};
use crate::orderbook::OrderBook;
use crate::types::{LimitOrder, SettlementReceipt, Transaction, GENESIS_ROOT};

/// Result of one submission round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Transactions revealed by the round's settlement, in order
    pub transactions: Vec<Transaction>,

    /// Receipt closing the round
    pub receipt: SettlementReceipt,
}

impl RoundOutcome {
    /// True if any transaction settled
    pub fn has_transactions(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Sum of settled quantities
    pub fn settled_quantity(&self) -> u64 {
        self.transactions.iter().map(|tx| tx.quantity).sum()
    }
}

/// Drives an [`OrderBook`] one submission round at a time.
///
/// ## Admission
///
/// An order is admitted while `submitted - executed < capacity`. Both counts
/// are public (orders arrive in the clear as events, transactions are
/// revealed), so the check reveals nothing new. Each transaction exhausts
/// at least one live order, which keeps the number of live orders on
/// either side below capacity and slot 0 of both containers inert.
///
/// ## Rounds
///
/// A round is `submit` followed by a full `settle`. Rounds take `&mut self`
/// and run to completion, so the operator never observes a partially
/// settled book.
pub struct MatchingEngine<B: Backend> {
    book: OrderBook<B>,
    config: EngineConfig,
    submitted: u64,
    executed: u64,
    round: u64,
    log_root: [u8; 32],
}

impl<B: Backend> MatchingEngine<B> {
    /// Create an engine with an empty book
    pub fn new(backend: B, config: EngineConfig) -> Self {
        Self {
            book: OrderBook::new(backend, config.capacity),
            config,
            submitted: 0,
            executed: 0,
            round: 0,
            log_root: GENESIS_ROOT,
        }
    }

    /// The book (read-only)
    #[inline]
    pub fn book(&self) -> &OrderBook<B> {
        &self.book
    }

    /// Engine configuration
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Orders admitted so far
    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted
    }

    /// Transactions revealed so far
    #[inline]
    pub fn executed(&self) -> u64 {
        self.executed
    }

    /// Rounds completed so far
    #[inline]
    pub fn round(&self) -> u64 {
        self.round
    }

    /// Running log root over every revealed transaction
    #[inline]
    pub fn log_root(&self) -> [u8; 32] {
        self.log_root
    }

    /// Submissions the admission rule still allows before any further
    /// transaction
    pub fn remaining_capacity(&self) -> u64 {
        let live_bound = self.submitted.saturating_sub(self.executed);
        (self.config.capacity as u64).saturating_sub(live_bound)
    }

    /// Seal a plaintext order with the book's backend and run a round
    pub fn submit(&mut self, order: &LimitOrder) -> Result<RoundOutcome> {
        let sealed = SecretOrder::seal(self.book.backend(), order);
        self.submit_sealed(sealed)
    }

    /// Run a round for an order already in backend form.
    ///
    /// # Errors
    ///
    /// - [`BookError::CapacityExceeded`] if the order cannot be admitted;
    ///   the book is untouched.
    /// - [`BookError::InvariantViolation`] if verification is enabled and a
    ///   container is out of order after the round.
    pub fn submit_sealed(&mut self, order: SecretOrder<B::Int>) -> Result<RoundOutcome> {
        if self.remaining_capacity() == 0 {
            warn!(
                capacity = self.config.capacity,
                submitted = self.submitted,
                executed = self.executed,
                "submission rejected, book full"
            );
            return Err(BookError::CapacityExceeded {
                capacity: self.config.capacity,
            });
        }

        self.book.submit(order);
        self.submitted += 1;
        self.round += 1;

        let transactions = self.book.settle();
        for tx in &transactions {
            info!(round = self.round, price = tx.price, quantity = tx.quantity, "transaction");
        }

        self.executed += transactions.len() as u64;
        self.log_root = SettlementReceipt::chain(self.log_root, &transactions)?;

        if self.config.verify_invariants {
            if let Err(e) = self.book.verify() {
                error!(round = self.round, error = %e, "book invariant violated");
                return Err(e);
            }
        }

        let receipt = SettlementReceipt::new(
            self.round,
            self.submitted,
            self.executed,
            transactions.len() as u64,
            self.log_root,
        );
        debug!(
            round = self.round,
            submitted = self.submitted,
            executed = self.executed,
            settled = transactions.len(),
            "round complete"
        );

        Ok(RoundOutcome {
            transactions,
            receipt,
        })
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
