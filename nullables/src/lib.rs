//! Nullable infrastructure for deterministic testing.
//!
//! Everything outside the process (clock, wallet, balance RPC, history
//! storage) sits behind a trait. This crate provides test-friendly
//! implementations that:
//! - return deterministic values
//! - can be controlled programmatically
//! - never touch the filesystem, the network or a real wallet
//!
//! Usage: swap real implementations for nullables in tests.

pub mod balance;
pub mod clock;
pub mod store;
pub mod wallet;

pub use balance::NullBalance;
pub use clock::NullClock;
pub use store::NullHistory;
pub use wallet::{ExecutedCall, NullDeployer, NullExecutor};
