//! Nullable wallet: scripted deploy/execute results, recorded calls.

use disperse_types::{EvmAddress, NativeAmount, TxHash};
use disperse_wallet_core::{CallOutcome, ContractDeployer, TransferExecutor};
use std::cell::RefCell;

/// One recorded `execute` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCall {
    pub contract: EvmAddress,
    pub recipients: Vec<EvmAddress>,
    pub amounts: Vec<NativeAmount>,
}

/// A transfer executor that records calls instead of signing anything.
///
/// Scripted outcomes are returned in order; once they run out, every call
/// succeeds with a hash derived from the call count.
pub struct NullExecutor {
    calls: RefCell<Vec<ExecutedCall>>,
    script: RefCell<Vec<CallOutcome<TxHash>>>,
}

impl NullExecutor {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            script: RefCell::new(Vec::new()),
        }
    }

    /// Queue the outcome of the next unscripted call.
    pub fn push_outcome(&self, outcome: CallOutcome<TxHash>) {
        self.script.borrow_mut().push(outcome);
    }

    pub fn calls(&self) -> Vec<ExecutedCall> {
        self.calls.borrow().clone()
    }

    /// Hash returned for the `n`th (1-based) unscripted call.
    pub fn hash_for_call(n: usize) -> TxHash {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&(n as u64).to_be_bytes());
        TxHash::new(bytes)
    }
}

impl Default for NullExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferExecutor for NullExecutor {
    async fn execute(
        &self,
        contract: &EvmAddress,
        recipients: &[EvmAddress],
        amounts: &[NativeAmount],
    ) -> CallOutcome<TxHash> {
        let mut calls = self.calls.borrow_mut();
        calls.push(ExecutedCall {
            contract: contract.clone(),
            recipients: recipients.to_vec(),
            amounts: amounts.to_vec(),
        });
        let mut script = self.script.borrow_mut();
        if script.is_empty() {
            CallOutcome::Success(Self::hash_for_call(calls.len()))
        } else {
            script.remove(0)
        }
    }
}

/// A deployer that returns a fixed outcome and counts calls.
pub struct NullDeployer {
    outcome: CallOutcome<EvmAddress>,
    calls: RefCell<usize>,
}

impl NullDeployer {
    pub fn succeeding(address: EvmAddress) -> Self {
        Self::with_outcome(CallOutcome::Success(address))
    }

    pub fn with_outcome(outcome: CallOutcome<EvmAddress>) -> Self {
        Self {
            outcome,
            calls: RefCell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.borrow()
    }
}

impl ContractDeployer for NullDeployer {
    async fn deploy(&self) -> CallOutcome<EvmAddress> {
        *self.calls.borrow_mut() += 1;
        self.outcome.clone()
    }
}
