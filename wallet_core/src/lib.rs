//! Wallet-facing side of the disperse client.
//!
//! Everything between the pure parser/gate and the outside world:
//! - the [`DisperseSession`] state record
//! - seams to the signing wallet ([`TransferExecutor`], [`ContractDeployer`])
//! - balance lookup over JSON-RPC ([`RpcClient`])
//! - the transaction history store
//! - TOML configuration

pub mod balance;
pub mod config;
pub mod error;
pub mod executor;
pub mod history;
pub mod outcome;
pub mod rpc;
pub mod session;
pub mod transaction_builder;

pub use balance::{fetch_balance_or_zero, BalanceSource};
pub use config::DisperseConfig;
pub use error::WalletError;
pub use executor::{ContractDeployer, TransferExecutor};
pub use history::{load_history, save_history, HistoryRecord, HistorySink, JsonHistoryStore};
pub use outcome::{CallKind, CallOutcome, WalletFailure};
pub use rpc::RpcClient;
pub use session::{DisperseSession, PendingSubmission};
pub use transaction_builder::{build_disperse_call, DisperseCall};
