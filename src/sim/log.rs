//! Simulated log: the interleaving of orders and transactions.

use std::fmt;

use tracing::warn;

use crate::engine::MatchingEngine;
use crate::error::{BookError, Result};
use crate::oblivious::Backend;
use crate::types::{LimitOrder, SettlementReceipt, Transaction};

/// One line of the simulated log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// An admitted order
    Order(LimitOrder),
    /// An order refused because the book was full
    Rejected(LimitOrder),
    /// A revealed transaction
    Transaction(Transaction),
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Order(order) => write!(f, "order       {}", order),
            LogEntry::Rejected(order) => write!(f, "rejected    {}", order),
            LogEntry::Transaction(tx) => write!(f, "transaction {}", tx),
        }
    }
}

/// Everything an operator observed while feeding an order log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulatedLog {
    pub entries: Vec<LogEntry>,
    /// Receipt of the last admitted round
    pub last_receipt: Option<SettlementReceipt>,
}

impl SimulatedLog {
    /// All transactions, in order
    pub fn transactions(&self) -> Vec<Transaction> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                LogEntry::Transaction(tx) => Some(*tx),
                _ => None,
            })
            .collect()
    }

    /// Number of rejected submissions
    pub fn rejected(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, LogEntry::Rejected(_)))
            .count()
    }
}

impl fmt::Display for SimulatedLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Feed `orders` to `engine` in sequence, recording what is observed.
///
/// Capacity rejections are recorded and the run continues. Any other error
/// (an invariant violation) aborts the run.
pub fn simulate<B, I>(engine: &mut MatchingEngine<B>, orders: I) -> Result<SimulatedLog>
where
    B: Backend,
    I: IntoIterator<Item = LimitOrder>,
{
    let mut log = SimulatedLog::default();

    for order in orders {
        match engine.submit(&order) {
            Ok(outcome) => {
                log.entries.push(LogEntry::Order(order));
                log.entries
                    .extend(outcome.transactions.into_iter().map(LogEntry::Transaction));
                log.last_receipt = Some(outcome.receipt);
            }
            Err(BookError::CapacityExceeded { capacity }) => {
                warn!(capacity, %order, "order dropped from simulation");
                log.entries.push(LogEntry::Rejected(order));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(log)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oblivious::Plaintext;
    use crate::EngineConfig;

    #[test]
    fn test_simulate_interleaves_entries() {
        let mut engine = MatchingEngine::new(Plaintext, EngineConfig::with_capacity(4));
        let orders = vec![LimitOrder::bid(300, 2), LimitOrder::ask(200, 8)];

        let log = simulate(&mut engine, orders).unwrap();

        assert_eq!(
            log.entries,
            vec![
                LogEntry::Order(LimitOrder::bid(300, 2)),
                LogEntry::Order(LimitOrder::ask(200, 8)),
                LogEntry::Transaction(Transaction::new(200, 2)),
            ]
        );
        assert_eq!(log.transactions(), vec![Transaction::new(200, 2)]);
        assert_eq!(log.last_receipt.map(|r| r.round), Some(2));
    }

    #[test]
    fn test_simulate_records_rejections() {
        let mut engine = MatchingEngine::new(Plaintext, EngineConfig::with_capacity(1));
        let orders = vec![LimitOrder::bid(100, 1), LimitOrder::bid(200, 1)];

        let log = simulate(&mut engine, orders).unwrap();

        assert_eq!(log.rejected(), 1);
        assert_eq!(log.entries[1], LogEntry::Rejected(LimitOrder::bid(200, 1)));
    }

    #[test]
    fn test_log_display() {
        let log = SimulatedLog {
            entries: vec![
                LogEntry::Order(LimitOrder::ask(200, 8)),
                LogEntry::Transaction(Transaction::new(200, 2)),
            ],
            last_receipt: None,
        };

        assert_eq!(log.to_string(), "order       ask 8 @ 200\ntransaction 2 @ 200\n");
    }
}
