//! Fundamental types for the disperse client.
//!
//! Shared by every other crate in the workspace: EVM addresses, native
//! token amounts, transaction hashes, timestamps and the network identifier.

pub mod address;
pub mod amount;
pub mod error;
pub mod hash;
pub mod network;
pub mod time;

pub use address::EvmAddress;
pub use amount::{NativeAmount, DECIMALS, WEI_PER_TOKEN};
pub use error::TypeError;
pub use hash::TxHash;
pub use network::NetworkId;
pub use time::Timestamp;
