//! Order book module for the dark book.
//!
//! ## Architecture
//!
//! The book is two fixed-capacity oblivious containers:
//!
//! - **Full scans**: every re-sort touches every slot, whatever the data
//! - **Conditional swaps**: ranking is done with selects, never branches
//! - **Fixed capacity**: slots are allocated once and never grow
//!
//! ## Components
//!
//! - [`SortedContainer`]: one side of the book, sorted by conditional swaps
//! - [`OrderBook`]: ask and bid containers with submit and settle
//!
//! ## Complexity
//!
//! | Operation    | Primitive operations |
//! |--------------|----------------------|
//! | `submit`     | O(k)                 |
//! | `match_top`  | O(k)                 |
//! | `settle`     | O(k²) worst case     |

mod book;
mod container;

pub use book::{BookSnapshot, OrderBook};
pub use container::{check_sorted, conditional_swap, SortPolicy, SortedContainer};
