//! Plaintext order types submitted by clients.
//!
//! ## SSZ Serialization
//!
//! `LimitOrder` derives `SimpleSerialize` from ssz_rs so an order log can be
//! encoded deterministically. The side is stored as a `u8` code, matching
//! the integer encoding the oblivious core uses for the tri-state side.
//!
//! ## Side Codes
//!
//! | Code | Meaning          |
//! |------|------------------|
//! | 0    | null (inert)     |
//! | 1    | ask              |
//! | 2    | bid              |

use std::fmt;

use ssz_rs::prelude::*;

/// Side code of an inert record (sentinel, wrong-side copy).
pub const SIDE_NULL: u64 = 0;

/// Side code of an ask.
pub const SIDE_ASK: u64 = 1;

/// Side code of a bid.
pub const SIDE_BID: u64 = 2;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Ask or Bid
///
/// The null side only exists inside the book; clients always pick one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Ask (sell) - wants to sell at `price` or higher
    #[default]
    Ask,
    /// Bid (buy) - wants to buy at `price` or lower
    Bid,
}

impl Side {
    /// Integer code used by the oblivious core
    pub fn code(self) -> u64 {
        match self {
            Side::Ask => SIDE_ASK,
            Side::Bid => SIDE_BID,
        }
    }

    /// Convert from a side code. The null code has no client side.
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            SIDE_ASK => Some(Side::Ask),
            SIDE_BID => Some(Side::Bid),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Ask => write!(f, "ask"),
            Side::Bid => write!(f, "bid"),
        }
    }
}

// ============================================================================
// LimitOrder struct
// ============================================================================

/// A plaintext limit order, as a client would submit it.
///
/// ## SSZ Layout
///
/// Fixed-size container of 17 bytes (8 + 8 + 1).
///
/// ## Example
///
/// ```
/// use dark_book::types::{LimitOrder, Side};
///
/// let order = LimitOrder::bid(300, 2);
/// assert_eq!(order.side(), Some(Side::Bid));
/// assert!(!order.is_inert());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct LimitOrder {
    /// Limit price
    pub price: u64,

    /// Quantity; zero makes the order inert
    pub quantity: u64,

    /// Side code (see module docs)
    pub side_raw: u8,
}

impl LimitOrder {
    /// Create a new limit order
    pub fn new(side: Side, price: u64, quantity: u64) -> Self {
        Self {
            price,
            quantity,
            side_raw: side.code() as u8,
        }
    }

    /// Create an ask
    pub fn ask(price: u64, quantity: u64) -> Self {
        Self::new(Side::Ask, price, quantity)
    }

    /// Create a bid
    pub fn bid(price: u64, quantity: u64) -> Self {
        Self::new(Side::Bid, price, quantity)
    }

    /// Get the order side, `None` for the null side
    pub fn side(&self) -> Option<Side> {
        Side::from_code(self.side_raw as u64)
    }

    /// Get the raw side code
    pub fn side_code(&self) -> u64 {
        self.side_raw as u64
    }

    /// An inert order can never match
    pub fn is_inert(&self) -> bool {
        self.quantity == 0 || self.side().is_none()
    }
}

impl fmt::Display for LimitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side() {
            Some(side) => write!(f, "{} {} @ {}", side, self.quantity, self.price),
            None => write!(f, "null {} @ {}", self.quantity, self.price),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_codes() {
        assert_eq!(Side::Ask.code(), SIDE_ASK);
        assert_eq!(Side::Bid.code(), SIDE_BID);
        assert_eq!(Side::from_code(SIDE_ASK), Some(Side::Ask));
        assert_eq!(Side::from_code(SIDE_BID), Some(Side::Bid));
        assert_eq!(Side::from_code(SIDE_NULL), None);
        assert_eq!(Side::from_code(7), None);
    }

    #[test]
    fn test_order_constructors() {
        let ask = LimitOrder::ask(800, 7);
        assert_eq!(ask.side(), Some(Side::Ask));
        assert_eq!(ask.price, 800);
        assert_eq!(ask.quantity, 7);
        assert_eq!(ask.side_code(), SIDE_ASK);

        let bid = LimitOrder::bid(300, 2);
        assert_eq!(bid.side(), Some(Side::Bid));
        assert_eq!(bid.side_code(), SIDE_BID);
    }

    #[test]
    fn test_order_inert() {
        assert!(LimitOrder::ask(800, 0).is_inert());
        assert!(!LimitOrder::ask(800, 1).is_inert());

        let null = LimitOrder {
            price: 100,
            quantity: 5,
            side_raw: 0,
        };
        assert!(null.is_inert());
        assert_eq!(null.side(), None);
    }

    #[test]
    fn test_order_display() {
        assert_eq!(LimitOrder::bid(300, 2).to_string(), "bid 2 @ 300");
        assert_eq!(LimitOrder::ask(800, 7).to_string(), "ask 7 @ 800");
    }

    #[test]
    fn test_order_ssz_size() {
        let order = LimitOrder::bid(300, 2);
        let bytes = ssz_rs::serialize(&order).expect("Failed to serialize");

        // price + quantity + side_raw
        assert_eq!(bytes.len(), 17, "LimitOrder should serialize to 17 bytes");
    }

    #[test]
    fn test_order_deterministic_serialization() {
        let order = LimitOrder::ask(200, 8);

        let bytes1 = ssz_rs::serialize(&order).expect("Failed to serialize");
        let bytes2 = ssz_rs::serialize(&order).expect("Failed to serialize");

        assert_eq!(bytes1, bytes2, "SSZ serialization must be deterministic");
    }
}
