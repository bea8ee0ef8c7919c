//! Network identifier and per-network constants.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The single EVM network a disperse session targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkId {
    /// Monad public testnet.
    MonadTestnet,
    /// Local development chain (anvil / hardhat).
    Dev,
}

impl NetworkId {
    pub fn chain_id(&self) -> u64 {
        match self {
            Self::MonadTestnet => 10143,
            Self::Dev => 31337,
        }
    }

    /// Ticker of the native token.
    pub fn currency_symbol(&self) -> &'static str {
        match self {
            Self::MonadTestnet => "MON",
            Self::Dev => "ETH",
        }
    }

    pub fn default_rpc_url(&self) -> &'static str {
        match self {
            Self::MonadTestnet => "https://testnet-rpc.monad.xyz",
            Self::Dev => "http://127.0.0.1:8545",
        }
    }

    /// Block explorer page for a transaction, if the network has one.
    pub fn explorer_tx_url(&self, tx: &crate::TxHash) -> Option<String> {
        match self {
            Self::MonadTestnet => Some(format!("https://testnet.monadexplorer.com/tx/{tx}")),
            Self::Dev => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MonadTestnet => "monad_testnet",
            Self::Dev => "dev",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "monad_testnet" | "testnet" | "monad" => Ok(Self::MonadTestnet),
            "dev" | "local" => Ok(Self::Dev),
            other => Err(format!("unknown network: {other}")),
        }
    }
}
