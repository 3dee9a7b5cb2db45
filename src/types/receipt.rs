//! Settlement receipt for a submission round.
//!
//! The receipt summarises one round and carries the running log root: a
//! SHA-256 chain over the SSZ encoding of every transaction revealed so far.
//! Two operators that observed the same transaction stream hold the same
//! root, without either of them learning anything beyond the stream.

use sha2::{Digest, Sha256};
use ssz_rs::prelude::*;

use crate::error::BookError;
use crate::types::Transaction;

/// Log root before any transaction has been revealed.
pub const GENESIS_ROOT: [u8; 32] = [0u8; 32];

/// Receipt produced at the end of every submission round.
///
/// ## Example
///
/// ```
/// use dark_book::types::{SettlementReceipt, Transaction, GENESIS_ROOT};
///
/// let root = SettlementReceipt::extend_root(GENESIS_ROOT, &Transaction::new(200, 2)).unwrap();
/// assert_ne!(root, GENESIS_ROOT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct SettlementReceipt {
    /// Round sequence number, starting at 1
    pub round: u64,

    /// Orders admitted so far, including this round's
    pub orders_submitted: u64,

    /// Transactions revealed so far, including this round's
    pub transactions_executed: u64,

    /// Transactions revealed in this round
    pub round_transactions: u64,

    /// Running SHA-256 root over all revealed transactions
    pub log_root: [u8; 32],
}

impl SettlementReceipt {
    /// Create a new receipt
    pub fn new(
        round: u64,
        orders_submitted: u64,
        transactions_executed: u64,
        round_transactions: u64,
        log_root: [u8; 32],
    ) -> Self {
        Self {
            round,
            orders_submitted,
            transactions_executed,
            round_transactions,
            log_root,
        }
    }

    /// Chain one transaction onto a log root: `H(root || ssz(tx))`
    pub fn extend_root(root: [u8; 32], transaction: &Transaction) -> crate::error::Result<[u8; 32]> {
        let encoded = ssz_rs::serialize(transaction)
            .map_err(|e| BookError::Encoding(format!("{:?}", e)))?;

        let mut hasher = Sha256::new();
        hasher.update(root);
        hasher.update(&encoded);

        let mut next = [0u8; 32];
        next.copy_from_slice(&hasher.finalize());
        Ok(next)
    }

    /// Fold a whole transaction sequence onto a log root
    pub fn chain<'a, I>(root: [u8; 32], transactions: I) -> crate::error::Result<[u8; 32]>
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .try_fold(root, |root, tx| Self::extend_root(root, tx))
    }

    /// Get the log root as a hex string
    pub fn log_root_hex(&self) -> String {
        hex::encode(self.log_root)
    }

    /// True if this round settled nothing
    pub fn is_quiet(&self) -> bool {
        self.round_transactions == 0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_new() {
        let receipt = SettlementReceipt::new(4, 4, 2, 2, [1u8; 32]);

        assert_eq!(receipt.round, 4);
        assert_eq!(receipt.orders_submitted, 4);
        assert_eq!(receipt.transactions_executed, 2);
        assert_eq!(receipt.round_transactions, 2);
        assert!(!receipt.is_quiet());
        assert_eq!(receipt.log_root_hex(), "01".repeat(32));
    }

    #[test]
    fn test_receipt_ssz_roundtrip() {
        let receipt = SettlementReceipt::new(7, 7, 3, 1, [9u8; 32]);

        let bytes = ssz_rs::serialize(&receipt).expect("Failed to serialize");
        // four u64 counters + 32-byte root
        assert_eq!(bytes.len(), 64);

        let decoded: SettlementReceipt = ssz_rs::deserialize(&bytes).expect("Failed to deserialize");
        assert_eq!(decoded, receipt);
    }

    #[test]
    fn test_extend_root_deterministic() {
        let tx = Transaction::new(200, 2);

        let root1 = SettlementReceipt::extend_root(GENESIS_ROOT, &tx).unwrap();
        let root2 = SettlementReceipt::extend_root(GENESIS_ROOT, &tx).unwrap();

        assert_eq!(root1, root2);
        assert_ne!(root1, GENESIS_ROOT);
    }

    #[test]
    fn test_chain_is_order_sensitive() {
        let a = Transaction::new(200, 2);
        let b = Transaction::new(200, 6);

        let ab = SettlementReceipt::chain(GENESIS_ROOT, [&a, &b]).unwrap();
        let ba = SettlementReceipt::chain(GENESIS_ROOT, [&b, &a]).unwrap();

        assert_ne!(ab, ba);
    }

    #[test]
    fn test_chain_empty() {
        let root = SettlementReceipt::chain(GENESIS_ROOT, std::iter::empty()).unwrap();
        assert_eq!(root, GENESIS_ROOT);
    }
}
