//! The gate itself.

use disperse_types::NativeAmount;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Snapshot of everything the gate looks at.
///
/// Derived from the session on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateState {
    pub has_entries: bool,
    pub total_amount: NativeAmount,
    pub balance: NativeAmount,
    /// The disperse contract is deployed and its address is known.
    pub contract_ready: bool,
    /// A submission is in flight.
    pub submitting: bool,
}

impl GateState {
    pub fn sufficient_balance(&self) -> bool {
        self.balance >= self.total_amount
    }

    /// How much more than `balance` the entries ask for, if anything.
    pub fn shortfall(&self) -> Option<NativeAmount> {
        self.total_amount
            .checked_sub(self.balance)
            .filter(|s| !s.is_zero())
    }
}

/// Why submission is blocked. Variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Error)]
pub enum GateBlock {
    #[error("a submission is already in progress.")]
    Submitting,

    #[error("no entries parsed.")]
    NoEntries,

    #[error("insufficient balance; need {shortfall} more than currently held")]
    InsufficientBalance { shortfall: NativeAmount },

    #[error("prerequisite setup step has not completed.")]
    ContractNotReady,
}

/// Outcome of [`can_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub allowed: bool,
    pub reason: Option<GateBlock>,
}

impl GateDecision {
    fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    fn block(reason: GateBlock) -> Self {
        Self {
            allowed: false,
            reason: Some(reason),
        }
    }

    pub fn into_result(self) -> Result<(), GateBlock> {
        match self.reason {
            Some(reason) => Err(reason),
            None => Ok(()),
        }
    }
}

/// Check the rules in order and report the first one that fails.
///
/// 1. nothing already in flight
/// 2. at least one entry
/// 3. balance covers the total (spending it all is fine)
/// 4. contract deployed
pub fn can_submit(state: &GateState) -> GateDecision {
    if state.submitting {
        return GateDecision::block(GateBlock::Submitting);
    }
    if !state.has_entries {
        return GateDecision::block(GateBlock::NoEntries);
    }
    if let Some(shortfall) = state.shortfall() {
        return GateDecision::block(GateBlock::InsufficientBalance { shortfall });
    }
    if !state.contract_ready {
        return GateDecision::block(GateBlock::ContractNotReady);
    }
    GateDecision::allow()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready(total: u64, balance: u64) -> GateState {
        GateState {
            has_entries: true,
            total_amount: NativeAmount::from_tokens(total),
            balance: NativeAmount::from_tokens(balance),
            contract_ready: true,
            submitting: false,
        }
    }

    #[test]
    fn allows_when_every_rule_passes() {
        let decision = can_submit(&ready(5, 10));
        assert!(decision.allowed);
        assert_eq!(decision.reason, None);
        assert_eq!(decision.into_result(), Ok(()));
    }

    #[test]
    fn spending_the_whole_balance_is_allowed() {
        assert!(can_submit(&ready(10, 10)).allowed);
    }

    #[test]
    fn shortfall_is_reported_exactly() {
        let state = GateState {
            total_amount: NativeAmount::from_decimal_str("10.5").unwrap(),
            ..ready(0, 10)
        };
        let decision = can_submit(&state);
        assert!(!decision.allowed);
        let reason = decision.reason.unwrap();
        assert_eq!(
            reason,
            GateBlock::InsufficientBalance {
                shortfall: NativeAmount::from_decimal_str("0.5").unwrap()
            }
        );
        assert_eq!(
            reason.to_string(),
            "insufficient balance; need 0.5 more than currently held"
        );
    }

    #[test]
    fn in_flight_submission_blocks_first() {
        let state = GateState {
            submitting: true,
            has_entries: false,
            contract_ready: false,
            ..ready(100, 1)
        };
        assert_eq!(can_submit(&state).reason, Some(GateBlock::Submitting));
    }

    #[test]
    fn no_entries_blocks_before_balance_and_contract() {
        let state = GateState {
            has_entries: false,
            contract_ready: false,
            ..ready(100, 1)
        };
        assert_eq!(can_submit(&state).reason, Some(GateBlock::NoEntries));
    }

    #[test]
    fn balance_is_reported_before_contract_setup() {
        let state = GateState {
            contract_ready: false,
            ..ready(100, 1)
        };
        assert!(matches!(
            can_submit(&state).reason,
            Some(GateBlock::InsufficientBalance { .. })
        ));
    }

    #[test]
    fn contract_must_be_ready() {
        let state = GateState {
            contract_ready: false,
            ..ready(1, 1)
        };
        let decision = can_submit(&state);
        assert_eq!(decision.reason, Some(GateBlock::ContractNotReady));
        assert_eq!(
            decision.reason.unwrap().to_string(),
            "prerequisite setup step has not completed."
        );
    }
}
