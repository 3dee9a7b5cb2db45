//! Oblivious building blocks for the dark book.
//!
//! ## Layers
//!
//! - [`Backend`]: the primitive operation layer. The substitution point for
//!   a secure-computation provider.
//! - [`SecretOrder`] and the `*_order` functions: selection lifted to order
//!   records.
//!
//! ## Backends
//!
//! - [`Plaintext`]: reference backend over `bool` / `u64`
//! - [`Recording`]: wraps a backend and records what an observer sees
//!
//! Nothing in this module logs; every value it touches is secret.

mod backend;
mod plaintext;
mod record;
mod recording;

pub use backend::Backend;
pub use plaintext::Plaintext;
pub use record::{max_order, min_order, select_order, select_pair, SecretOrder};
pub use recording::{OpCounts, Recording, Reveal};
