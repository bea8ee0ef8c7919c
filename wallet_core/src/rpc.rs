//! JSON-RPC client for an EVM node.

use disperse_types::{EvmAddress, NativeAmount, NetworkId, TypeError};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::balance::BalanceSource;
use crate::error::WalletError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

// ── RpcClient ───────────────────────────────────────────────────────────

/// HTTP client for an Ethereum-style JSON-RPC endpoint.
///
/// Wraps `reqwest::Client` with the endpoint URL and exposes the few
/// read-only calls the disperse client needs.
#[derive(Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

impl RpcClient {
    /// Create a client for `url` (e.g. `https://testnet-rpc.monad.xyz`).
    pub fn new(url: impl Into<String>) -> Result<Self, WalletError> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, WalletError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()
            .map_err(|e| WalletError::Rpc(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a JSON-RPC 2.0 request and return its `result`.
    async fn rpc_call(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<serde_json::Value, WalletError> {
        let body = request_body(method, params);
        debug!(url = %self.url, method, "rpc request");

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| WalletError::Rpc(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WalletError::Rpc(format!(
                "node returned HTTP {}",
                response.status()
            )));
        }

        let parsed: RpcResponse = response
            .json()
            .await
            .map_err(|e| WalletError::Rpc(format!("invalid JSON response: {e}")))?;
        into_result(parsed)
    }

    /// `eth_getBalance` at the latest block.
    pub async fn get_balance(&self, account: &EvmAddress) -> Result<NativeAmount, WalletError> {
        let result = self
            .rpc_call(
                "eth_getBalance",
                serde_json::json!([account.to_lower_hex(), "latest"]),
            )
            .await?;
        let quantity = result
            .as_str()
            .ok_or_else(|| WalletError::Rpc("eth_getBalance result is not a string".into()))?;
        Ok(NativeAmount::from_wei(parse_hex_quantity(quantity)?))
    }

    /// `eth_chainId`.
    pub async fn chain_id(&self) -> Result<u64, WalletError> {
        let result = self.rpc_call("eth_chainId", serde_json::json!([])).await?;
        let quantity = result
            .as_str()
            .ok_or_else(|| WalletError::Rpc("eth_chainId result is not a string".into()))?;
        let id = parse_hex_quantity(quantity)?;
        u64::try_from(id).map_err(|_| WalletError::Rpc(format!("chain id out of range: {id}")))
    }

    /// Fail unless the node serves `network`.
    pub async fn ensure_network(&self, network: NetworkId) -> Result<(), WalletError> {
        let actual = self.chain_id().await?;
        if actual != network.chain_id() {
            return Err(WalletError::ChainMismatch {
                expected: network.chain_id(),
                actual,
            });
        }
        Ok(())
    }
}

impl BalanceSource for RpcClient {
    async fn balance(&self, account: &EvmAddress) -> Result<NativeAmount, WalletError> {
        self.get_balance(account).await
    }
}

fn request_body(method: &str, params: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params,
    })
}

fn into_result(response: RpcResponse) -> Result<serde_json::Value, WalletError> {
    if let Some(err) = response.error {
        return Err(WalletError::Rpc(format!(
            "node error {}: {}",
            err.code, err.message
        )));
    }
    response
        .result
        .ok_or_else(|| WalletError::Rpc("response has neither result nor error".into()))
}

/// Decode a JSON-RPC hex quantity such as `"0x1bc16d674ec80000"`.
pub fn parse_hex_quantity(s: &str) -> Result<u128, TypeError> {
    let digits = s
        .strip_prefix("0x")
        .filter(|d| !d.is_empty() && d.len() <= 32)
        .ok_or_else(|| TypeError::InvalidQuantity(s.to_string()))?;
    u128::from_str_radix(digits, 16).map_err(|_| TypeError::InvalidQuantity(s.to_string()))
}
