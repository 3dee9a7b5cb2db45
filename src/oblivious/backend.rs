//! The primitive operation layer.
//!
//! Every operation above this layer is expressed through [`Backend`]. A
//! plaintext implementation is used for testing; a secure-computation
//! provider implements the same trait over ciphertexts or secret shares.
//!
//! ## Contract
//!
//! - Every operation is total and runs with the same control-flow shape
//!   whatever the underlying plaintext values are.
//! - [`Backend::select`] is the only substitute for a conditional branch.
//! - [`Backend::decrypt_bool`] and [`Backend::decrypt_int`] are the only
//!   points where a secret value becomes visible to the operator.

/// Capability set of a secure-computation provider.
///
/// `Bool` and `Int` are the provider's secret value types. Integers carry
/// prices, quantities and side codes, all non-negative.
pub trait Backend {
    /// Secret boolean
    type Bool: Clone;

    /// Secret non-negative integer
    type Int: Clone;

    /// Lift a public constant into the secret domain
    fn constant(&self, value: u64) -> Self::Int;

    /// Boolean OR
    fn or(&self, a: &Self::Bool, b: &Self::Bool) -> Self::Bool;

    /// `n` if `c`, else `m`
    fn select(&self, c: &Self::Bool, n: &Self::Int, m: &Self::Int) -> Self::Int;

    /// `n == 0`
    fn is_zero(&self, n: &Self::Int) -> Self::Bool;

    /// `n < m`
    fn less_than(&self, n: &Self::Int, m: &Self::Int) -> Self::Bool;

    /// `n + m`
    fn add(&self, n: &Self::Int, m: &Self::Int) -> Self::Int;

    /// `n - m`
    fn sub(&self, n: &Self::Int, m: &Self::Int) -> Self::Int;

    /// Reveal a boolean to the operator
    fn decrypt_bool(&self, b: &Self::Bool) -> bool;

    /// Reveal an integer to the operator
    fn decrypt_int(&self, n: &Self::Int) -> u64;

    /// The smaller of `n` and `m`
    fn min(&self, n: &Self::Int, m: &Self::Int) -> Self::Int {
        let lt = self.less_than(n, m);
        self.select(&lt, n, m)
    }

    /// The larger of `n` and `m`
    fn max(&self, n: &Self::Int, m: &Self::Int) -> Self::Int {
        let lt = self.less_than(n, m);
        self.select(&lt, m, n)
    }
}
