//! Wallet balance lookup.

use disperse_types::{EvmAddress, NativeAmount};
use tracing::warn;

use crate::error::WalletError;

/// Read-only source of native token balances.
#[allow(async_fn_in_trait)]
pub trait BalanceSource {
    async fn balance(&self, account: &EvmAddress) -> Result<NativeAmount, WalletError>;
}

/// Fetch a balance, treating any failure as zero.
///
/// The error message is returned alongside so it can be displayed; a
/// failed lookup never aborts the caller.
pub async fn fetch_balance_or_zero<B: BalanceSource>(
    source: &B,
    account: &EvmAddress,
) -> (NativeAmount, Option<String>) {
    match source.balance(account).await {
        Ok(balance) => (balance, None),
        Err(e) => {
            warn!(%account, error = %e, "balance lookup failed, showing zero");
            (NativeAmount::ZERO, Some(e.to_string()))
        }
    }
}
