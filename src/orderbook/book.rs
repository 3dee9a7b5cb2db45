//! The oblivious order book: submission and settlement.
//!
//! ## Structure
//!
//! - **Asks**: descending container, sentinel price `u64::MAX`
//! - **Bids**: ascending container, sentinel price `0`
//!
//! Every submission is written into both containers. The copy headed for
//! the wrong side is tagged inert with a select, so the operator cannot
//! tell an ask from a bid until it trades.
//!
//! ## Reveals
//!
//! Each [`OrderBook::match_top`] reveals exactly one boolean (did the tops
//! cross) and, only when they did, two integers (price, then quantity).
//! Nothing else leaves the book.
//!
//! ## Example
//!
//! ```
//! use dark_book::oblivious::{Plaintext, SecretOrder};
//! use dark_book::orderbook::OrderBook;
//! use dark_book::types::{LimitOrder, Transaction};
//!
//! let b = Plaintext;
//! let mut book = OrderBook::new(Plaintext, 4);
//!
//! book.submit(SecretOrder::seal(&b, &LimitOrder::bid(300, 2)));
//! book.submit(SecretOrder::seal(&b, &LimitOrder::ask(200, 8)));
//!
//! assert_eq!(book.settle(), vec![Transaction::new(200, 2)]);
//! assert!(book.settle().is_empty());
//! ```

use crate::error::Result;
use crate::oblivious::{select_pair, Backend, SecretOrder};
use crate::orderbook::{SortPolicy, SortedContainer};
use crate::types::{LimitOrder, Transaction, SIDE_ASK, SIDE_BID, SIDE_NULL};

/// Two-sided book of fixed capacity over a backend `B`.
pub struct OrderBook<B: Backend> {
    backend: B,
    asks: SortedContainer<B::Int>,
    bids: SortedContainer<B::Int>,
}

impl<B: Backend> OrderBook<B> {
    /// Create a book with `capacity` slots per side
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(backend: B, capacity: usize) -> Self {
        let asks = SortedContainer::new(&backend, capacity, SortPolicy::Descending);
        let bids = SortedContainer::new(&backend, capacity, SortPolicy::Ascending);
        Self {
            backend,
            asks,
            bids,
        }
    }

    /// Backend the book computes with
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Slots per side
    #[inline]
    pub fn capacity(&self) -> usize {
        self.asks.capacity()
    }

    /// Ask container (descending)
    #[inline]
    pub fn asks(&self) -> &SortedContainer<B::Int> {
        &self.asks
    }

    /// Bid container (ascending)
    #[inline]
    pub fn bids(&self) -> &SortedContainer<B::Int> {
        &self.bids
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Insert an order into both containers.
    ///
    /// The ask copy keeps the order's side code only if it is the ask code;
    /// otherwise it becomes null. The bid copy likewise. A side code that is
    /// neither yields two inert copies.
    ///
    /// # Precondition
    ///
    /// Slot 0 of both containers must be inert, i.e. fewer than `capacity`
    /// orders may be live. The book does not check this; see
    /// [`MatchingEngine`](crate::engine::MatchingEngine) for the admission
    /// rule. Violating it silently overwrites a live order.
    pub fn submit(&mut self, order: SecretOrder<B::Int>) {
        let b = &self.backend;
        let null = b.constant(SIDE_NULL);

        let is_ask = b.is_zero(&b.sub(&order.side, &b.constant(SIDE_ASK)));
        let is_bid = b.is_zero(&b.sub(&order.side, &b.constant(SIDE_BID)));

        let ask_copy = SecretOrder {
            price: order.price.clone(),
            quantity: order.quantity.clone(),
            side: b.select(&is_ask, &order.side, &null),
        };
        let bid_copy = SecretOrder {
            price: order.price,
            quantity: order.quantity,
            side: b.select(&is_bid, &order.side, &null),
        };

        self.asks.insert(b, ask_copy);
        self.bids.insert(b, bid_copy);
    }

    // ========================================================================
    // Settlement
    // ========================================================================

    /// Try to settle the top ask against the top bid.
    ///
    /// Returns `None` if the tops do not cross or either is inert. Otherwise
    /// both tops are reduced by the traded quantity and the containers are
    /// re-sorted.
    pub fn match_top(&mut self) -> Option<Transaction> {
        let b = &self.backend;
        let ask = self.asks.top().clone();
        let bid = self.bids.top().clone();

        let quantity = b.min(&ask.quantity, &bid.quantity);
        let apart = b.less_than(&bid.price, &ask.price);
        let no_match = b.or(
            &b.or(&apart, &b.is_zero(&quantity)),
            &b.or(&b.is_zero(&ask.side), &b.is_zero(&bid.side)),
        );

        if b.decrypt_bool(&no_match) {
            return None;
        }

        let price = b.decrypt_int(&ask.price);
        let traded = b.decrypt_int(&quantity);

        let filled_ask = ask.reduced(b, &quantity);
        let filled_bid = bid.reduced(b, &quantity);
        let (next_ask, next_bid) = select_pair(b, &apart, (&ask, &bid), (&filled_ask, &filled_bid));

        self.asks.set_top(next_ask);
        self.bids.set_top(next_bid);
        self.asks.arrange_from_top(b);
        self.bids.arrange_from_top(b);

        Some(Transaction::new(price, traded))
    }

    /// Settle until the tops no longer cross.
    ///
    /// Every transaction exhausts at least one top entry, so this runs at
    /// most `2 * capacity` times.
    pub fn settle(&mut self) -> Vec<Transaction> {
        let mut transactions = Vec::new();
        while let Some(tx) = self.match_top() {
            transactions.push(tx);
        }
        transactions
    }

    // ========================================================================
    // Diagnostics (reveal everything)
    // ========================================================================

    /// Check both containers' sort invariant. Reveals the whole book.
    pub fn verify(&self) -> Result<()> {
        self.asks.verify_sorted(&self.backend)?;
        self.bids.verify_sorted(&self.backend)
    }

    /// Decrypted view of the active entries. Reveals the whole book.
    pub fn snapshot(&self) -> BookSnapshot {
        let active = |container: &SortedContainer<B::Int>| -> Vec<LimitOrder> {
            container
                .reveal(&self.backend)
                .into_iter()
                .filter(|o| !o.is_inert())
                .rev()
                .collect()
        };
        BookSnapshot {
            asks: active(&self.asks),
            bids: active(&self.bids),
        }
    }
}

/// Revealed active entries of a book, best first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookSnapshot {
    pub asks: Vec<LimitOrder>,
    pub bids: Vec<LimitOrder>,
}

impl BookSnapshot {
    /// Resting ask quantity
    pub fn ask_quantity(&self) -> u64 {
        self.asks.iter().map(|o| o.quantity).sum()
    }

    /// Resting bid quantity
    pub fn bid_quantity(&self) -> u64 {
        self.bids.iter().map(|o| o.quantity).sum()
    }

    /// Lowest resting ask price
    pub fn best_ask(&self) -> Option<u64> {
        self.asks.first().map(|o| o.price)
    }

    /// Highest resting bid price
    pub fn best_bid(&self) -> Option<u64> {
        self.bids.first().map(|o| o.price)
    }

    /// Number of live orders on both sides
    pub fn live_orders(&self) -> usize {
        self.asks.len() + self.bids.len()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
