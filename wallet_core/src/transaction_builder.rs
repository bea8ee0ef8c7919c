//! Turning parsed entries into the arguments of a disperse call.

use disperse_parser::ParseResult;
use disperse_types::{EvmAddress, NativeAmount};

use crate::error::WalletError;

/// Arguments of `disperse(recipients, amounts)` plus the value attached to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisperseCall {
    pub contract: EvmAddress,
    pub recipients: Vec<EvmAddress>,
    pub amounts: Vec<NativeAmount>,
    /// Sum of `amounts`; sent as the transaction value.
    pub value: NativeAmount,
}

impl DisperseCall {
    pub fn len(&self) -> usize {
        self.recipients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipients.is_empty()
    }
}

/// Split entries into parallel recipient/amount lists.
///
/// The value is re-summed from the amounts rather than copied from the
/// parse result, so the two can never disagree.
pub fn build_disperse_call(
    contract: &EvmAddress,
    parsed: &ParseResult,
) -> Result<DisperseCall, WalletError> {
    let recipients = parsed.addresses();
    let amounts = parsed.amounts();
    let value = NativeAmount::checked_sum(&amounts)
        .ok_or_else(|| WalletError::Other("disperse value overflows".into()))?;
    Ok(DisperseCall {
        contract: contract.clone(),
        recipients,
        amounts,
        value,
    })
}
