use disperse_gate::GateBlock;
use disperse_types::TypeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("submission blocked: {0}")]
    Blocked(#[from] GateBlock),

    #[error("contract deployment already in progress")]
    DeployInFlight,

    #[error("no submission in progress")]
    NotSubmitting,

    #[error("invalid value: {0}")]
    InvalidValue(#[from] TypeError),

    #[error("node RPC error: {0}")]
    Rpc(String),

    #[error("chain id mismatch: expected {expected}, node reports {actual}")]
    ChainMismatch { expected: u64, actual: u64 },

    #[error("history store error: {0}")]
    History(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}
