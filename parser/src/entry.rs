//! Parse output types.

use disperse_types::{EvmAddress, NativeAmount};
use serde::{Deserialize, Serialize};

use crate::error::ParseErrorKind;

/// One validated recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipientEntry {
    pub address: EvmAddress,
    /// The amount as the user wrote it, trimmed.
    pub value: String,
    /// `value` as an exact amount. Always non-zero.
    pub amount: NativeAmount,
}

/// A rejected input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineIssue {
    /// 1-based line number in the original text, blank lines included.
    pub line: usize,
    pub kind: ParseErrorKind,
}

/// Result of one [`crate::parse`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Valid entries in input order. Duplicates are kept.
    pub entries: Vec<RecipientEntry>,
    /// The error of the last rejected line, if any line was rejected.
    pub error: Option<ParseErrorKind>,
    /// Exact sum of `entries` amounts.
    pub total_amount: NativeAmount,
    /// Every rejected line, in input order.
    pub issues: Vec<LineIssue>,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The user-facing message for [`Self::error`].
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|kind| kind.to_string())
    }

    pub fn addresses(&self) -> Vec<EvmAddress> {
        self.entries.iter().map(|e| e.address.clone()).collect()
    }

    pub fn amounts(&self) -> Vec<NativeAmount> {
        self.entries.iter().map(|e| e.amount).collect()
    }
}
