//! EVM account address (`0x` + 40 hex digits).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::TypeError;

/// A 20-byte EVM address.
///
/// Keeps the exact text it was parsed from so the user sees their own
/// casing back. Equality and hashing only look at the bytes, so
/// `0xABCD…` and `0xabcd…` are the same account.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EvmAddress {
    bytes: [u8; 20],
    text: String,
}

impl EvmAddress {
    pub const PREFIX: &'static str = "0x";

    /// Total length of the textual form, prefix included.
    pub const TEXT_LEN: usize = 42;

    /// Parse `0x` followed by exactly 40 hex digits (either case).
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        if s.len() != Self::TEXT_LEN {
            return Err(TypeError::AddressLength(s.chars().count()));
        }
        let digits = s.strip_prefix(Self::PREFIX).ok_or(TypeError::AddressPrefix)?;
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|_| TypeError::AddressNotHex(s.to_string()))?;
        Ok(Self {
            bytes,
            text: s.to_string(),
        })
    }

    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self {
            bytes,
            text: format!("0x{}", hex::encode(bytes)),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.bytes
    }

    /// The address as originally written.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Lowercase canonical form, as sent over JSON-RPC.
    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Whether `s` is a well-formed address.
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }
}

impl PartialEq for EvmAddress {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for EvmAddress {}

impl Hash for EvmAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state);
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for EvmAddress {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EvmAddress {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<EvmAddress> for String {
    fn from(addr: EvmAddress) -> Self {
        addr.text
    }
}
