//! Record selection layer: selection and ordering lifted to orders.
//!
//! Everything here is built from [`Backend`] primitives only. No function
//! inspects the contents of its records; the same sequence of primitives
//! runs whatever the records hold.

use super::Backend;
use crate::types::{LimitOrder, SIDE_NULL};

/// An order whose fields are backend values.
///
/// The side is an integer code (`0` null, `1` ask, `2` bid). A record with
/// zero quantity or null side is inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretOrder<I> {
    pub price: I,
    pub quantity: I,
    pub side: I,
}

impl<I: Clone> SecretOrder<I> {
    /// Build a record from backend values
    pub fn new(price: I, quantity: I, side: I) -> Self {
        Self {
            price,
            quantity,
            side,
        }
    }

    /// Lift a plaintext order into the backend
    pub fn seal<B: Backend<Int = I>>(b: &B, order: &LimitOrder) -> Self {
        Self {
            price: b.constant(order.price),
            quantity: b.constant(order.quantity),
            side: b.constant(order.side_code()),
        }
    }

    /// Inert placeholder at `price`
    pub fn sentinel<B: Backend<Int = I>>(b: &B, price: u64) -> Self {
        Self {
            price: b.constant(price),
            quantity: b.constant(0),
            side: b.constant(SIDE_NULL),
        }
    }

    /// `quantity == 0 || side == null`
    pub fn is_inert<B: Backend<Int = I>>(&self, b: &B) -> B::Bool {
        b.or(&b.is_zero(&self.quantity), &b.is_zero(&self.side))
    }

    /// Same price and side, quantity reduced by `filled`
    pub fn reduced<B: Backend<Int = I>>(&self, b: &B, filled: &I) -> Self {
        Self {
            price: self.price.clone(),
            quantity: b.sub(&self.quantity, filled),
            side: self.side.clone(),
        }
    }

    /// Decrypt every field. Diagnostic only.
    ///
    /// A side code that does not fit the `u8` field is reported as null,
    /// matching how the book treats any unknown code.
    pub fn reveal<B: Backend<Int = I>>(&self, b: &B) -> LimitOrder {
        LimitOrder {
            price: b.decrypt_int(&self.price),
            quantity: b.decrypt_int(&self.quantity),
            side_raw: u8::try_from(b.decrypt_int(&self.side)).unwrap_or(SIDE_NULL as u8),
        }
    }
}

/// Field-wise `s` if `c`, else `t`
pub fn select_order<B: Backend>(
    b: &B,
    c: &B::Bool,
    s: &SecretOrder<B::Int>,
    t: &SecretOrder<B::Int>,
) -> SecretOrder<B::Int> {
    SecretOrder {
        price: b.select(c, &s.price, &t.price),
        quantity: b.select(c, &s.quantity, &t.quantity),
        side: b.select(c, &s.side, &t.side),
    }
}

/// The lower-priced record
pub fn min_order<B: Backend>(
    b: &B,
    s: &SecretOrder<B::Int>,
    t: &SecretOrder<B::Int>,
) -> SecretOrder<B::Int> {
    let lt = b.less_than(&s.price, &t.price);
    select_order(b, &lt, s, t)
}

/// The higher-priced record
pub fn max_order<B: Backend>(
    b: &B,
    s: &SecretOrder<B::Int>,
    t: &SecretOrder<B::Int>,
) -> SecretOrder<B::Int> {
    let lt = b.less_than(&s.price, &t.price);
    select_order(b, &lt, t, s)
}

/// Both records of `p` if `c`, else both of `q`
pub fn select_pair<B: Backend>(
    b: &B,
    c: &B::Bool,
    p: (&SecretOrder<B::Int>, &SecretOrder<B::Int>),
    q: (&SecretOrder<B::Int>, &SecretOrder<B::Int>),
) -> (SecretOrder<B::Int>, SecretOrder<B::Int>) {
    (select_order(b, c, p.0, q.0), select_order(b, c, p.1, q.1))
}

// ============================================================================
// Unit Tests
// ============================================================================
