//! One user's disperse session.
//!
//! Holds the state a UI would otherwise scatter across flags: the raw text,
//! the current parse, the balance, the contract address and the two
//! in-flight markers. Every input change re-parses; the gate is evaluated
//! against a snapshot of this record.
//!
//! Long-running wallet calls are split into `begin_*` / `finish_*` so an
//! event loop can keep the session responsive while a call is pending. The
//! `deploy` and `submit` helpers run both halves back to back.

use disperse_gate::{can_submit, BalanceSummary, GateDecision, GateState};
use disperse_parser::{parse, ParseMode, ParseResult};
use disperse_types::{EvmAddress, NativeAmount, NetworkId, Timestamp, TxHash};
use tracing::{info, warn};

use crate::balance::{fetch_balance_or_zero, BalanceSource};
use crate::error::WalletError;
use crate::executor::{ContractDeployer, TransferExecutor};
use crate::history::{HistoryRecord, HistorySink};
use crate::outcome::CallOutcome;
use crate::transaction_builder::{build_disperse_call, DisperseCall};

/// A submission that passed the gate and is waiting on the wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub call: DisperseCall,
    parsed: ParseResult,
}

#[derive(Debug, Clone)]
pub struct DisperseSession {
    network: NetworkId,
    input: String,
    mode: ParseMode,
    uniform_amount: String,
    parsed: ParseResult,
    balance: NativeAmount,
    balance_error: Option<String>,
    contract: Option<EvmAddress>,
    deploying: bool,
    submitting: bool,
}

impl DisperseSession {
    pub fn new(network: NetworkId) -> Self {
        Self {
            network,
            input: String::new(),
            mode: ParseMode::default(),
            uniform_amount: String::new(),
            parsed: ParseResult::default(),
            balance: NativeAmount::ZERO,
            balance_error: None,
            contract: None,
            deploying: false,
            submitting: false,
        }
    }

    /// Start with a contract that was deployed earlier.
    pub fn with_contract(mut self, contract: EvmAddress) -> Self {
        self.contract = Some(contract);
        self
    }

    pub fn network(&self) -> NetworkId {
        self.network
    }

    // ── Input ───────────────────────────────────────────────────────────

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.reparse();
    }

    pub fn set_mode(&mut self, mode: ParseMode) {
        self.mode = mode;
        self.reparse();
    }

    pub fn set_uniform_amount(&mut self, amount: impl Into<String>) {
        self.uniform_amount = amount.into();
        self.reparse();
    }

    fn reparse(&mut self) {
        let uniform = match self.mode {
            ParseMode::UniformValue => Some(self.uniform_amount.as_str()),
            ParseMode::Paired => None,
        };
        self.parsed = parse(&self.input, self.mode, uniform);
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    pub fn uniform_amount(&self) -> &str {
        &self.uniform_amount
    }

    pub fn parsed(&self) -> &ParseResult {
        &self.parsed
    }

    // ── Balance ─────────────────────────────────────────────────────────

    pub fn balance(&self) -> NativeAmount {
        self.balance
    }

    /// Why the last balance lookup failed, if it did.
    pub fn balance_error(&self) -> Option<&str> {
        self.balance_error.as_deref()
    }

    pub fn set_balance(&mut self, balance: NativeAmount) {
        self.balance = balance;
        self.balance_error = None;
    }

    /// Re-read the balance. A failed lookup sets it to zero and keeps the
    /// error for display.
    pub async fn refresh_balance<B: BalanceSource>(
        &mut self,
        source: &B,
        account: &EvmAddress,
    ) -> NativeAmount {
        let (balance, error) = fetch_balance_or_zero(source, account).await;
        self.balance = balance;
        self.balance_error = error;
        balance
    }

    pub fn summary(&self) -> BalanceSummary {
        BalanceSummary::new(self.parsed.total_amount, self.balance)
    }

    // ── Gate ────────────────────────────────────────────────────────────

    pub fn contract(&self) -> Option<&EvmAddress> {
        self.contract.as_ref()
    }

    pub fn is_contract_ready(&self) -> bool {
        self.contract.is_some()
    }

    pub fn is_deploying(&self) -> bool {
        self.deploying
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn gate_state(&self) -> GateState {
        GateState {
            has_entries: !self.parsed.is_empty(),
            total_amount: self.parsed.total_amount,
            balance: self.balance,
            contract_ready: self.is_contract_ready(),
            submitting: self.submitting,
        }
    }

    pub fn can_submit(&self) -> GateDecision {
        can_submit(&self.gate_state())
    }

    // ── Deployment ──────────────────────────────────────────────────────

    /// Mark a deployment as in flight.
    pub fn begin_deploy(&mut self) -> Result<(), WalletError> {
        if self.deploying {
            return Err(WalletError::DeployInFlight);
        }
        self.deploying = true;
        Ok(())
    }

    /// Record the deployment result and clear the in-flight marker.
    pub fn finish_deploy(&mut self, outcome: &CallOutcome<EvmAddress>) {
        self.deploying = false;
        match outcome {
            CallOutcome::Success(address) => {
                info!(contract = %address, "disperse contract deployed");
                self.contract = Some(address.clone());
            }
            CallOutcome::UserRejected(msg) => info!(%msg, "deployment rejected by user"),
            CallOutcome::Failed(msg) => warn!(%msg, "deployment failed"),
        }
    }

    pub async fn deploy<D: ContractDeployer>(
        &mut self,
        deployer: &D,
    ) -> Result<CallOutcome<EvmAddress>, WalletError> {
        self.begin_deploy()?;
        let outcome = deployer.deploy().await;
        self.finish_deploy(&outcome);
        Ok(outcome)
    }

    // ── Submission ──────────────────────────────────────────────────────

    /// Check the gate and, if it passes, mark a submission as in flight.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, WalletError> {
        self.can_submit().into_result()?;
        let contract = self
            .contract
            .as_ref()
            .ok_or_else(|| WalletError::Other("contract address missing".into()))?;
        let call = build_disperse_call(contract, &self.parsed)?;
        self.submitting = true;
        info!(
            contract = %call.contract,
            recipients = call.len(),
            value = %call.value,
            "submitting disperse"
        );
        Ok(PendingSubmission {
            call,
            parsed: self.parsed.clone(),
        })
    }

    /// Clear the in-flight marker and, on success, record the transfer.
    ///
    /// A history write failure is logged and does not change the outcome:
    /// the transfer itself already happened.
    pub fn finish_submit<H: HistorySink>(
        &mut self,
        pending: PendingSubmission,
        outcome: &CallOutcome<TxHash>,
        history: &mut H,
        now: Timestamp,
    ) -> Result<(), WalletError> {
        if !self.submitting {
            return Err(WalletError::NotSubmitting);
        }
        self.submitting = false;

        match outcome {
            CallOutcome::Success(tx) => {
                info!(%tx, "disperse confirmed");
                let record = HistoryRecord {
                    contract_address: pending.call.contract,
                    transaction_hash: *tx,
                    total_value: pending.call.value,
                    recipients: pending.parsed.entries,
                    timestamp: now,
                };
                if let Err(e) = history.append(record) {
                    warn!(error = %e, "failed to record disperse in history");
                }
            }
            CallOutcome::UserRejected(msg) => info!(%msg, "disperse rejected by user"),
            CallOutcome::Failed(msg) => warn!(%msg, "disperse failed"),
        }
        Ok(())
    }

    pub async fn submit<E: TransferExecutor, H: HistorySink>(
        &mut self,
        executor: &E,
        history: &mut H,
        now: Timestamp,
    ) -> Result<CallOutcome<TxHash>, WalletError> {
        let pending = self.begin_submit()?;
        let outcome = executor
            .execute(
                &pending.call.contract,
                &pending.call.recipients,
                &pending.call.amounts,
            )
            .await;
        self.finish_submit(pending, &outcome, history, now)?;
        Ok(outcome)
    }
}
