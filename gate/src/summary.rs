//! Total / balance / remaining figures for display.

use disperse_types::NativeAmount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Balance left after the disperse, which may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum Remaining {
    Surplus(NativeAmount),
    Shortfall(NativeAmount),
}

impl Remaining {
    pub fn between(balance: NativeAmount, total: NativeAmount) -> Self {
        match balance.checked_sub(total) {
            Some(left) => Self::Surplus(left),
            None => Self::Shortfall(total.saturating_sub(balance)),
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Shortfall(_))
    }

    /// Signed, fixed-point rendering, e.g. `-0.5000`.
    pub fn format_fixed(&self, places: usize) -> String {
        match self {
            Self::Surplus(a) => a.format_fixed(places),
            Self::Shortfall(a) => format!("-{}", a.format_fixed(places)),
        }
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surplus(a) => write!(f, "{a}"),
            Self::Shortfall(a) => write!(f, "-{a}"),
        }
    }
}

/// The value summary shown next to the recipient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total: NativeAmount,
    pub balance: NativeAmount,
    pub remaining: Remaining,
}

impl BalanceSummary {
    /// Decimal places used when rendering for users.
    pub const DISPLAY_PLACES: usize = 4;

    pub fn new(total: NativeAmount, balance: NativeAmount) -> Self {
        Self {
            total,
            balance,
            remaining: Remaining::between(balance, total),
        }
    }

    /// Three labelled lines with the given currency symbol.
    pub fn render(&self, symbol: &str) -> String {
        let places = Self::DISPLAY_PLACES;
        format!(
            "Total Value: {} {symbol}\nWallet Balance: {} {symbol}\nRemaining Balance: {} {symbol}",
            self.total.format_fixed(places),
            self.balance.format_fixed(places),
            self.remaining.format_fixed(places),
        )
    }
}
