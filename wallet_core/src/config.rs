//! Client configuration with TOML file support.

use disperse_parser::ParseMode;
use disperse_types::{EvmAddress, NetworkId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::WalletError;

/// Configuration for a disperse client.
///
/// Loaded from a TOML file via [`DisperseConfig::from_toml_file`] or built
/// programmatically. Every field has a default, so an empty file is valid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisperseConfig {
    /// Which network to talk to.
    #[serde(default = "default_network")]
    pub network: NetworkId,

    /// JSON-RPC endpoint. Defaults to the network's public endpoint.
    #[serde(default)]
    pub rpc_url: Option<String>,

    /// Already-deployed disperse contract. Without one, submission waits
    /// for a deployment.
    #[serde(default)]
    pub contract_address: Option<EvmAddress>,

    /// Account whose balance gates submission.
    #[serde(default)]
    pub account: Option<EvmAddress>,

    /// Default input mode.
    #[serde(default)]
    pub mode: ParseMode,

    /// Where completed disperses are recorded.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,

    /// RPC request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_network() -> NetworkId {
    NetworkId::MonadTestnet
}

fn default_history_path() -> PathBuf {
    PathBuf::from("./disperse_history.json")
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl DisperseConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, WalletError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WalletError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, WalletError> {
        toml::from_str(s).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, WalletError> {
        toml::to_string_pretty(self).map_err(|e| WalletError::Config(e.to_string()))
    }

    /// The configured RPC endpoint, or the network default.
    pub fn rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.default_rpc_url())
    }
}

impl Default for DisperseConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            rpc_url: None,
            contract_address: None,
            account: None,
            mode: ParseMode::default(),
            history_path: default_history_path(),
            request_timeout_secs: default_request_timeout_secs(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = DisperseConfig {
            contract_address: Some(EvmAddress::from_bytes([7u8; 20])),
            ..DisperseConfig::default()
        };
        let toml_str = config.to_toml_string().unwrap();
        let parsed = DisperseConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed.network, config.network);
        assert_eq!(parsed.contract_address, config.contract_address);
        assert_eq!(parsed.history_path, config.history_path);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = DisperseConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.network, NetworkId::MonadTestnet);
        assert_eq!(config.mode, ParseMode::Paired);
        assert_eq!(config.log_format, "human");
        assert_eq!(config.rpc_url(), "https://testnet-rpc.monad.xyz");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            network = "dev"
            mode = "uniform_value"
            rpc_url = "http://localhost:9545"
            contract_address = "0xABCDEFABCDEFABCDEFABCDEFABCDEFABCDEFABCD"
        "#;
        let config = DisperseConfig::from_toml_str(toml).expect("should parse");
        assert_eq!(config.network, NetworkId::Dev);
        assert_eq!(config.mode, ParseMode::UniformValue);
        assert_eq!(config.rpc_url(), "http://localhost:9545");
        assert!(config.contract_address.is_some());
        assert_eq!(config.log_level, "info"); // default
    }

    #[test]
    fn malformed_contract_address_is_rejected() {
        let result = DisperseConfig::from_toml_str(r#"contract_address = "0x1234""#);
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = DisperseConfig::from_toml_file(Path::new("/nonexistent/disperse.toml"));
        assert!(matches!(result, Err(WalletError::Config(_))));
    }
}
