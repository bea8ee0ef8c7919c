//! Results of calls into the external wallet.
//!
//! Wallet calls either succeed, are rejected by the user in their wallet,
//! or fail for some other reason. Rejection is kept apart so the UI can
//! show it as a soft, retryable notice instead of an error.

use serde::{Deserialize, Serialize};

/// Error code wallets use when the user declines a request.
pub const ACTION_REJECTED: &str = "ACTION_REJECTED";

/// Message fragments that also mean the user declined.
const REJECTION_PHRASES: [&str; 2] = ["user rejected", "User denied transaction"];

/// Raw error as reported by a wallet provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletFailure {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl WalletFailure {
    pub fn new(code: Option<&str>, message: Option<&str>) -> Self {
        Self {
            code: code.map(str::to_string),
            message: message.map(str::to_string),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: Some(message.into()),
        }
    }

    pub fn is_user_rejection(&self) -> bool {
        if self.code.as_deref() == Some(ACTION_REJECTED) {
            return true;
        }
        self.message
            .as_deref()
            .is_some_and(|m| REJECTION_PHRASES.iter().any(|p| m.contains(p)))
    }
}

/// Which wallet action a failure came from; selects the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Transfer,
    Deployment,
}

impl CallKind {
    pub fn rejection_message(&self) -> &'static str {
        match self {
            Self::Transfer => {
                "Transaction was rejected by the user. Please try again if you want to proceed."
            }
            Self::Deployment => {
                "Contract deployment was rejected by the user. Please try again if you want to proceed."
            }
        }
    }

    pub fn unknown_error_message(&self) -> &'static str {
        match self {
            Self::Transfer => "An unknown error occurred while processing the transaction.",
            Self::Deployment => "An unknown error occurred while deploying the contract.",
        }
    }
}

/// Tagged result of a deploy or execute call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum CallOutcome<T> {
    Success(T),
    UserRejected(String),
    Failed(String),
}

impl<T> CallOutcome<T> {
    /// Classify a raw wallet result.
    pub fn from_wallet(result: Result<T, WalletFailure>, kind: CallKind) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) if failure.is_user_rejection() => {
                Self::UserRejected(kind.rejection_message().to_string())
            }
            Err(failure) => Self::Failed(
                failure
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| kind.unknown_error_message().to_string()),
            ),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_user_rejected(&self) -> bool {
        matches!(self, Self::UserRejected(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::UserRejected(msg) | Self::Failed(msg) => Some(msg),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> CallOutcome<U> {
        match self {
            Self::Success(value) => CallOutcome::Success(f(value)),
            Self::UserRejected(msg) => CallOutcome::UserRejected(msg),
            Self::Failed(msg) => CallOutcome::Failed(msg),
        }
    }
}
