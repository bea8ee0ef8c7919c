//! Seams to the wallet that signs and broadcasts.

use disperse_types::{EvmAddress, NativeAmount, TxHash};

use crate::outcome::CallOutcome;

/// Sends a disperse transaction through the helper contract.
///
/// Called once per accepted submission. The transaction value is the sum of
/// `amounts`; `recipients` and `amounts` are parallel and non-empty.
#[allow(async_fn_in_trait)]
pub trait TransferExecutor {
    async fn execute(
        &self,
        contract: &EvmAddress,
        recipients: &[EvmAddress],
        amounts: &[NativeAmount],
    ) -> CallOutcome<TxHash>;
}

/// Deploys the helper contract. Success yields its address.
#[allow(async_fn_in_trait)]
pub trait ContractDeployer {
    async fn deploy(&self) -> CallOutcome<EvmAddress>;
}
