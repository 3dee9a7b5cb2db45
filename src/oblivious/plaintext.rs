//! Plaintext reference backend.
//!
//! Values are ordinary `bool` and `u64`; reveals are identities. Arithmetic
//! wraps so every operation stays total.

use super::Backend;

/// Reference backend over plain integers.
///
/// ## Example
///
/// ```
/// use dark_book::oblivious::{Backend, Plaintext};
///
/// let b = Plaintext;
/// assert_eq!(b.min(&3, &5), 3);
/// assert_eq!(b.select(&false, &3, &5), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plaintext;

impl Backend for Plaintext {
    type Bool = bool;
    type Int = u64;

    #[inline]
    fn constant(&self, value: u64) -> u64 {
        value
    }

    #[inline]
    fn or(&self, a: &bool, b: &bool) -> bool {
        *a | *b
    }

    #[inline]
    fn select(&self, c: &bool, n: &u64, m: &u64) -> u64 {
        // all ones when `c` holds
        let mask = (*c as u64).wrapping_neg();
        (n & mask) | (m & !mask)
    }

    #[inline]
    fn is_zero(&self, n: &u64) -> bool {
        *n == 0
    }

    #[inline]
    fn less_than(&self, n: &u64, m: &u64) -> bool {
        n < m
    }

    #[inline]
    fn add(&self, n: &u64, m: &u64) -> u64 {
        n.wrapping_add(*m)
    }

    #[inline]
    fn sub(&self, n: &u64, m: &u64) -> u64 {
        n.wrapping_sub(*m)
    }

    #[inline]
    fn decrypt_bool(&self, b: &bool) -> bool {
        *b
    }

    #[inline]
    fn decrypt_int(&self, n: &u64) -> u64 {
        *n
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select() {
        let b = Plaintext;
        assert_eq!(b.select(&true, &7, &9), 7);
        assert_eq!(b.select(&false, &7, &9), 9);
        assert_eq!(b.select(&true, &u64::MAX, &0), u64::MAX);
        assert_eq!(b.select(&false, &u64::MAX, &0), 0);
    }

    #[test]
    fn test_comparisons() {
        let b = Plaintext;
        assert!(b.is_zero(&0));
        assert!(!b.is_zero(&1));
        assert!(b.less_than(&1, &2));
        assert!(!b.less_than(&2, &2));
        assert!(b.or(&false, &true));
        assert!(!b.or(&false, &false));
    }

    #[test]
    fn test_arithmetic_is_total() {
        let b = Plaintext;
        assert_eq!(b.add(&2, &3), 5);
        assert_eq!(b.sub(&8, &2), 6);
        assert_eq!(b.sub(&0, &1), u64::MAX);
        assert_eq!(b.add(&u64::MAX, &1), 0);
    }

    #[test]
    fn test_min_max() {
        let b = Plaintext;
        assert_eq!(b.min(&8, &2), 2);
        assert_eq!(b.max(&8, &2), 8);
        assert_eq!(b.min(&4, &4), 4);
        assert_eq!(b.max(&4, &4), 4);
    }

    #[test]
    fn test_reveals_are_identity() {
        let b = Plaintext;
        assert!(b.decrypt_bool(&true));
        assert_eq!(b.decrypt_int(&42), 42);
        assert_eq!(b.constant(42), 42);
    }
}
