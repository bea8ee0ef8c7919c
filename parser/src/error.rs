//! Per-line parse failures.
//!
//! These never escape [`crate::parse`] as `Err`; they are reported through
//! [`crate::ParseResult::error`] and [`crate::ParseResult::issues`]. The
//! display strings are the messages shown to the user verbatim.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ParseErrorKind {
    /// No comma, colon or whitespace on a paired line.
    #[error("Invalid format. Please use address,value or address:value or address value")]
    InvalidFormat,

    #[error("Each line must contain both address and value")]
    MissingField,

    #[error("Invalid Ethereum address format detected")]
    InvalidAddress,

    /// Not a finite decimal, or not strictly positive.
    #[error("Invalid numeric value. Value must be greater than 0")]
    InvalidAmount,

    /// Adding the line would push the running total past `u128` wei.
    #[error("Total value exceeds the supported range")]
    TotalOverflow,
}
