//! Oblivious sorted container.
//!
//! ## Design
//!
//! A fixed-length buffer of [`SecretOrder`] records kept in rank order by
//! full passes of pairwise conditional swaps. No pass ever looks at a
//! value: each pair goes through the same nested selects whatever it holds.
//!
//! ```text
//! index:   0        1        ...      k-1
//!          [inert]  [inert]  [worst]  [top of book]
//! ```
//!
//! - Inert entries rank lowest and collect at the front
//! - Active entries follow in policy order, best price last
//! - `insert` overwrites position 0 and bubbles upward in one pass
//! - After a settlement, the top entry sinks downward in one pass

use crate::error::{BookError, Result};
use crate::oblivious::{max_order, min_order, select_pair, Backend, SecretOrder};
use crate::types::LimitOrder;

/// Ordering policy of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortPolicy {
    /// Prices increase toward the top (bids: best = highest)
    Ascending,
    /// Prices decrease toward the top (asks: best = lowest)
    Descending,
}

impl SortPolicy {
    /// Price of the inert entries a fresh container is filled with
    pub fn sentinel_price(self) -> u64 {
        match self {
            SortPolicy::Ascending => 0,
            SortPolicy::Descending => u64::MAX,
        }
    }

    /// Book side this policy serves, for diagnostics
    pub fn side_name(self) -> &'static str {
        match self {
            SortPolicy::Ascending => "bid",
            SortPolicy::Descending => "ask",
        }
    }
}

/// Conditional swap of an adjacent pair under `policy`.
///
/// Returns `(t, s)` if `t` is inert, else `(s, t)` if `s` is inert, else
/// the pair ranked by price. Evaluated as a fixed two-level nested select.
pub fn conditional_swap<B: Backend>(
    b: &B,
    policy: SortPolicy,
    s: &SecretOrder<B::Int>,
    t: &SecretOrder<B::Int>,
) -> (SecretOrder<B::Int>, SecretOrder<B::Int>) {
    let s_inert = s.is_inert(b);
    let t_inert = t.is_inert(b);

    let lo = min_order(b, s, t);
    let hi = max_order(b, s, t);
    // public policy, not a secret branch
    let ranked = match policy {
        SortPolicy::Ascending => (lo, hi),
        SortPolicy::Descending => (hi, lo),
    };

    let inner = select_pair(b, &s_inert, (s, t), (&ranked.0, &ranked.1));
    select_pair(b, &t_inert, (t, s), (&inner.0, &inner.1))
}

/// Fixed-capacity container of secret orders.
#[derive(Debug, Clone)]
pub struct SortedContainer<I> {
    entries: Vec<SecretOrder<I>>,
    policy: SortPolicy,
}

impl<I: Clone> SortedContainer<I> {
    /// Create a container of `capacity` inert sentinels
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero: a book needs at least one slot.
    pub fn new<B: Backend<Int = I>>(b: &B, capacity: usize, policy: SortPolicy) -> Self {
        assert!(capacity > 0, "container capacity must be positive");
        let sentinel = SecretOrder::sentinel(b, policy.sentinel_price());
        Self {
            entries: vec![sentinel; capacity],
            policy,
        }
    }

    /// Fixed number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Ordering policy
    #[inline]
    pub fn policy(&self) -> SortPolicy {
        self.policy
    }

    /// All slots, lowest rank first
    #[inline]
    pub fn entries(&self) -> &[SecretOrder<I>] {
        &self.entries
    }

    /// Best-ranked entry (last slot)
    #[inline]
    pub fn top(&self) -> &SecretOrder<I> {
        &self.entries[self.entries.len() - 1]
    }

    /// Overwrite the best-ranked slot. The caller re-sorts.
    #[inline]
    pub fn set_top(&mut self, order: SecretOrder<I>) {
        let last = self.entries.len() - 1;
        self.entries[last] = order;
    }

    /// Overwrite slot 0 with `order` and restore the sort order.
    ///
    /// Slot 0 must hold an inert entry; the session engine's capacity check
    /// guarantees this. Overwriting an active entry loses it.
    pub fn insert<B: Backend<Int = I>>(&mut self, b: &B, order: SecretOrder<I>) {
        self.entries[0] = order;
        self.arrange(b);
    }

    /// One bottom-to-top pass of conditional swaps.
    ///
    /// Relocates a single entry written at slot 0 of an otherwise sorted
    /// container.
    pub fn arrange<B: Backend<Int = I>>(&mut self, b: &B) {
        for i in 0..self.entries.len() - 1 {
            self.swap_at(b, i);
        }
    }

    /// One top-to-bottom pass of conditional swaps.
    ///
    /// Relocates a single entry rewritten at the top slot, in particular an
    /// exhausted top that must sink into the inert region.
    pub fn arrange_from_top<B: Backend<Int = I>>(&mut self, b: &B) {
        for i in (0..self.entries.len() - 1).rev() {
            self.swap_at(b, i);
        }
    }

    fn swap_at<B: Backend<Int = I>>(&mut self, b: &B, i: usize) {
        let (first, second) = conditional_swap(b, self.policy, &self.entries[i], &self.entries[i + 1]);
        self.entries[i] = first;
        self.entries[i + 1] = second;
    }

    /// Decrypt every slot. Diagnostic only: reveals the whole container.
    pub fn reveal<B: Backend<Int = I>>(&self, b: &B) -> Vec<LimitOrder> {
        self.entries.iter().map(|e| e.reveal(b)).collect()
    }

    /// Check the sort invariant on decrypted entries. Diagnostic only.
    pub fn verify_sorted<B: Backend<Int = I>>(&self, b: &B) -> Result<()> {
        check_sorted(&self.reveal(b), self.policy)
    }
}

/// Check that `entries` satisfy `policy`: inert entries strictly before
/// active ones, active entries in price order.
pub fn check_sorted(entries: &[LimitOrder], policy: SortPolicy) -> Result<()> {
    for (index, pair) in entries.windows(2).enumerate() {
        let (s, t) = (&pair[0], &pair[1]);
        let ordered = match (s.is_inert(), t.is_inert()) {
            (_, true) => s.is_inert(),
            (true, false) => true,
            (false, false) => match policy {
                SortPolicy::Ascending => s.price <= t.price,
                SortPolicy::Descending => s.price >= t.price,
            },
        };
        if !ordered {
            return Err(BookError::InvariantViolation {
                side: policy.side_name(),
                index,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oblivious::Plaintext;
    use crate::types::{SIDE_ASK, SIDE_BID, SIDE_NULL};

    fn ask(price: u64, quantity: u64) -> SecretOrder<u64> {
        SecretOrder::new(price, quantity, SIDE_ASK)
    }

    fn bid(price: u64, quantity: u64) -> SecretOrder<u64> {
        SecretOrder::new(price, quantity, SIDE_BID)
    }

    fn prices(container: &SortedContainer<u64>) -> Vec<u64> {
        container
            .entries()
            .iter()
            .filter(|e| e.quantity != 0 && e.side != SIDE_NULL)
            .map(|e| e.price)
            .collect()
    }

    #[test]
    fn test_new_is_all_sentinels() {
        let b = Plaintext;
        let asks = SortedContainer::new(&b, 4, SortPolicy::Descending);
        let bids = SortedContainer::new(&b, 4, SortPolicy::Ascending);

        assert_eq!(asks.capacity(), 4);
        assert_eq!(asks.top().price, u64::MAX);
        assert_eq!(bids.top().price, 0);
        assert!(asks.entries().iter().all(|e| e.is_inert(&b)));
        asks.verify_sorted(&b).unwrap();
        bids.verify_sorted(&b).unwrap();
    }

    #[test]
    #[should_panic(expected = "capacity must be positive")]
    fn test_zero_capacity_panics() {
        let _ = SortedContainer::new(&Plaintext, 0, SortPolicy::Ascending);
    }

    #[test]
    fn test_conditional_swap_cases() {
        let b = Plaintext;
        let inert = SecretOrder::new(5, 0, SIDE_ASK);

        // t inert: swapped whatever s is
        assert_eq!(
            conditional_swap(&b, SortPolicy::Descending, &ask(100, 1), &inert),
            (inert.clone(), ask(100, 1))
        );
        // s inert, t active: unchanged
        assert_eq!(
            conditional_swap(&b, SortPolicy::Descending, &inert, &ask(100, 1)),
            (inert.clone(), ask(100, 1))
        );
        // both active: ranked by policy
        assert_eq!(
            conditional_swap(&b, SortPolicy::Descending, &ask(100, 1), &ask(200, 1)),
            (ask(200, 1), ask(100, 1))
        );
        assert_eq!(
            conditional_swap(&b, SortPolicy::Ascending, &bid(200, 1), &bid(100, 1)),
            (bid(100, 1), bid(200, 1))
        );
    }

    #[test]
    fn test_insert_descending() {
        let b = Plaintext;
        let mut asks = SortedContainer::new(&b, 5, SortPolicy::Descending);

        for price in [500, 200, 800, 300] {
            asks.insert(&b, ask(price, 1));
            asks.verify_sorted(&b).unwrap();
        }

        assert_eq!(prices(&asks), vec![800, 500, 300, 200]);
        assert_eq!(asks.top().price, 200);
    }

    #[test]
    fn test_insert_ascending() {
        let b = Plaintext;
        let mut bids = SortedContainer::new(&b, 5, SortPolicy::Ascending);

        for price in [500, 200, 800, 300] {
            bids.insert(&b, bid(price, 1));
            bids.verify_sorted(&b).unwrap();
        }

        assert_eq!(prices(&bids), vec![200, 300, 500, 800]);
        assert_eq!(bids.top().price, 800);
    }

    #[test]
    fn test_insert_inert_stays_behind() {
        let b = Plaintext;
        let mut bids = SortedContainer::new(&b, 3, SortPolicy::Ascending);

        bids.insert(&b, bid(100, 1));
        bids.insert(&b, SecretOrder::new(900, 4, SIDE_NULL));

        assert_eq!(bids.top(), &bid(100, 1));
        bids.verify_sorted(&b).unwrap();
    }

    #[test]
    fn test_exhausted_top_sinks() {
        let b = Plaintext;
        let mut bids = SortedContainer::new(&b, 5, SortPolicy::Ascending);
        for price in [100, 200, 300] {
            bids.insert(&b, bid(price, 1));
        }

        bids.set_top(bid(300, 0));
        bids.arrange_from_top(&b);

        bids.verify_sorted(&b).unwrap();
        assert_eq!(prices(&bids), vec![100, 200]);
        assert_eq!(bids.top(), &bid(200, 1));
    }

    #[test]
    fn test_bottom_up_pass_cannot_sink_top() {
        let b = Plaintext;
        let mut bids = SortedContainer::new(&b, 4, SortPolicy::Ascending);
        for price in [100, 200, 300] {
            bids.insert(&b, bid(price, 1));
        }

        bids.set_top(bid(300, 0));
        bids.arrange(&b);

        assert!(matches!(
            bids.verify_sorted(&b),
            Err(BookError::InvariantViolation { side: "bid", .. })
        ));
    }

    #[test]
    fn test_check_sorted_reports_index() {
        let entries = vec![
            LimitOrder::ask(0, 0),
            LimitOrder::ask(300, 1),
            LimitOrder::ask(500, 1),
        ];

        let err = check_sorted(&entries, SortPolicy::Descending).unwrap_err();
        assert_eq!(err, BookError::InvariantViolation { side: "ask", index: 1 });
        check_sorted(&entries, SortPolicy::Ascending).unwrap();
    }
}
