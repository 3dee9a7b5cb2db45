//! Seeded order log generation.
//!
//! Uses `ChaCha8Rng`, so the same configuration always yields the same log.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{LimitOrder, Side};

/// Shape of a generated order log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLogConfig {
    /// Number of orders
    pub count: usize,
    /// RNG seed
    pub seed: u64,
    /// Lowest price, inclusive
    pub min_price: u64,
    /// Highest price, inclusive
    pub max_price: u64,
    /// Prices are multiples of this step
    pub price_step: u64,
    /// Quantities are drawn from `1..=max_quantity`
    pub max_quantity: u64,
}

impl Default for OrderLogConfig {
    fn default() -> Self {
        Self {
            count: 20,
            seed: 42,
            min_price: 100,
            max_price: 1_000,
            price_step: 100,
            max_quantity: 10,
        }
    }
}

/// Generate a deterministic order log.
///
/// Sides are a fair coin. Prices are uniform over the multiples of
/// `price_step` that lie in `min_price..=max_price`. If no multiple falls in
/// that range every order is priced at `min_price`.
///
/// ## Example
///
/// ```
/// use dark_book::sim::{generate_order_log, OrderLogConfig};
///
/// let config = OrderLogConfig { count: 5, ..OrderLogConfig::default() };
/// assert_eq!(generate_order_log(&config), generate_order_log(&config));
/// ```
pub fn generate_order_log(config: &OrderLogConfig) -> Vec<LimitOrder> {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let step = config.price_step.max(1);
    let lo = config.min_price.div_ceil(step);
    let hi = config.max_price / step;
    let max_quantity = config.max_quantity.max(1);

    (0..config.count)
        .map(|_| {
            let side = if rng.gen_bool(0.5) { Side::Bid } else { Side::Ask };
            let price = if lo <= hi {
                rng.gen_range(lo..=hi) * step
            } else {
                config.min_price
            };
            let quantity = rng.gen_range(1..=max_quantity);
            LimitOrder::new(side, price, quantity)
        })
        .collect()
}
