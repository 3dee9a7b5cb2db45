//! Recording backend: counts primitive calls and logs every reveal.
//!
//! Wraps any [`Backend`] and forwards to it. The recorded data is exactly
//! what an observer of a secure backend could see: how many operations of
//! each kind ran, and the sequence of revealed values. Tests use it to show
//! that both depend only on already-revealed outcomes.

use std::cell::{Cell, RefCell};

use super::Backend;

/// Number of calls per primitive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub constant: u64,
    pub or: u64,
    pub select: u64,
    pub is_zero: u64,
    pub less_than: u64,
    pub add: u64,
    pub sub: u64,
}

impl OpCounts {
    /// Total primitive operations, reveals excluded
    pub fn total(&self) -> u64 {
        self.constant + self.or + self.select + self.is_zero + self.less_than + self.add + self.sub
    }
}

/// A value handed to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Bool(bool),
    Int(u64),
}

/// Backend wrapper that records what an observer sees.
///
/// ## Example
///
/// ```
/// use dark_book::oblivious::{Backend, Plaintext, Recording, Reveal};
///
/// let b = Recording::new(Plaintext);
/// let lt = b.less_than(&1, &2);
/// assert!(b.decrypt_bool(&lt));
/// assert_eq!(b.reveals(), vec![Reveal::Bool(true)]);
/// assert_eq!(b.counts().less_than, 1);
/// ```
#[derive(Debug, Default)]
pub struct Recording<B> {
    inner: B,
    counts: Cell<OpCounts>,
    reveals: RefCell<Vec<Reveal>>,
}

impl<B: Backend> Recording<B> {
    /// Wrap a backend
    pub fn new(inner: B) -> Self {
        Self {
            inner,
            counts: Cell::new(OpCounts::default()),
            reveals: RefCell::new(Vec::new()),
        }
    }

    /// Operation counts so far
    pub fn counts(&self) -> OpCounts {
        self.counts.get()
    }

    /// Every reveal so far, in order
    pub fn reveals(&self) -> Vec<Reveal> {
        self.reveals.borrow().clone()
    }

    /// Forget all counts and reveals
    pub fn reset(&self) {
        self.counts.set(OpCounts::default());
        self.reveals.borrow_mut().clear();
    }

    fn bump(&self, f: impl FnOnce(&mut OpCounts)) {
        let mut counts = self.counts.get();
        f(&mut counts);
        self.counts.set(counts);
    }
}

impl<B: Backend> Backend for Recording<B> {
    type Bool = B::Bool;
    type Int = B::Int;

    fn constant(&self, value: u64) -> Self::Int {
        self.bump(|c| c.constant += 1);
        self.inner.constant(value)
    }

    fn or(&self, a: &Self::Bool, b: &Self::Bool) -> Self::Bool {
        self.bump(|c| c.or += 1);
        self.inner.or(a, b)
    }

    fn select(&self, c: &Self::Bool, n: &Self::Int, m: &Self::Int) -> Self::Int {
        self.bump(|counts| counts.select += 1);
        self.inner.select(c, n, m)
    }

    fn is_zero(&self, n: &Self::Int) -> Self::Bool {
        self.bump(|c| c.is_zero += 1);
        self.inner.is_zero(n)
    }

    fn less_than(&self, n: &Self::Int, m: &Self::Int) -> Self::Bool {
        self.bump(|c| c.less_than += 1);
        self.inner.less_than(n, m)
    }

    fn add(&self, n: &Self::Int, m: &Self::Int) -> Self::Int {
        self.bump(|c| c.add += 1);
        self.inner.add(n, m)
    }

    fn sub(&self, n: &Self::Int, m: &Self::Int) -> Self::Int {
        self.bump(|c| c.sub += 1);
        self.inner.sub(n, m)
    }

    fn decrypt_bool(&self, b: &Self::Bool) -> bool {
        let value = self.inner.decrypt_bool(b);
        self.reveals.borrow_mut().push(Reveal::Bool(value));
        value
    }

    fn decrypt_int(&self, n: &Self::Int) -> u64 {
        let value = self.inner.decrypt_int(n);
        self.reveals.borrow_mut().push(Reveal::Int(value));
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oblivious::Plaintext;

    #[test]
    fn test_counts_forwarded_calls() {
        let b = Recording::new(Plaintext);

        assert_eq!(b.min(&8, &2), 2);
        assert_eq!(b.add(&1, &2), 3);

        let counts = b.counts();
        assert_eq!(counts.less_than, 1);
        assert_eq!(counts.select, 1);
        assert_eq!(counts.add, 1);
        assert_eq!(counts.total(), 3);
        assert!(b.reveals().is_empty());
    }

    #[test]
    fn test_records_reveals_in_order() {
        let b = Recording::new(Plaintext);

        b.decrypt_bool(&false);
        b.decrypt_int(&200);
        b.decrypt_int(&2);

        assert_eq!(
            b.reveals(),
            vec![Reveal::Bool(false), Reveal::Int(200), Reveal::Int(2)]
        );

        b.reset();
        assert!(b.reveals().is_empty());
        assert_eq!(b.counts(), OpCounts::default());
    }
}
