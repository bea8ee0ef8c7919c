//! Errors raised while constructing the fundamental types from text.

use thiserror::Error;

/// Error for malformed addresses, hashes and amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("address must be 42 characters, got {0}")]
    AddressLength(usize),

    #[error("address must start with 0x")]
    AddressPrefix,

    #[error("address contains non-hex characters: {0}")]
    AddressNotHex(String),

    #[error("transaction hash must be 0x followed by 64 hex characters: {0}")]
    InvalidHash(String),

    #[error("amount is empty")]
    EmptyAmount,

    #[error("malformed amount: {0}")]
    MalformedAmount(String),

    #[error("too many decimal places: at most {max}, found {found}")]
    TooManyDecimals { max: usize, found: usize },

    #[error("amount exceeds the representable range")]
    AmountOverflow,

    #[error("invalid hex quantity: {0}")]
    InvalidQuantity(String),
}
