//! Demonstration harness.
//!
//! Not part of the oblivious core. It produces order logs and consumes the
//! book's output through the same two entry points any client would use.
//!
//! - [`generate_order_log`]: seeded random orders
//! - [`simulate`]: feed orders to an engine and record the simulated log

mod generator;
mod log;

pub use generator::{generate_order_log, OrderLogConfig};
pub use log::{simulate, LogEntry, SimulatedLog};
