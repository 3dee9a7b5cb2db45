//! Transaction type: the revealed outcome of one settlement step.
//!
//! A transaction is produced by the book and never stored there. It is the
//! only thing the operator ever learns about executed activity.

use std::fmt;

use ssz_rs::prelude::*;

/// A settled match between the top ask and the top bid.
///
/// ## Price Discovery
///
/// The trade executes at the ask's price. The quantity is the smaller of
/// the two matched quantities, so at least one side is exhausted by every
/// transaction.
///
/// ## Example
///
/// ```
/// use dark_book::types::Transaction;
///
/// let tx = Transaction::new(200, 6);
/// assert_eq!(tx.to_string(), "6 @ 200");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, SimpleSerialize)]
pub struct Transaction {
    /// Execution price (the ask's price)
    pub price: u64,

    /// Executed quantity
    pub quantity: u64,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(price: u64, quantity: u64) -> Self {
        Self { price, quantity }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.quantity, self.price)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transaction_new() {
        let tx = Transaction::new(200, 2);
        assert_eq!(tx.price, 200);
        assert_eq!(tx.quantity, 2);
        assert_eq!(tx.to_string(), "2 @ 200");
    }

    #[test]
    fn test_transaction_ssz_size() {
        let tx = Transaction::new(200, 6);
        let bytes = ssz_rs::serialize(&tx).expect("Failed to serialize");

        assert_eq!(bytes.len(), 16, "Transaction should serialize to 16 bytes");
        assert_eq!(&bytes[..8], &200u64.to_le_bytes());
        assert_eq!(&bytes[8..], &6u64.to_le_bytes());
    }
}
