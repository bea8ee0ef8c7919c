//! Input modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How each input line is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// Every line carries its own address and amount.
    #[default]
    Paired,
    /// Every line is only an address; one shared amount applies to all.
    UniformValue,
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paired => f.write_str("paired"),
            Self::UniformValue => f.write_str("uniform"),
        }
    }
}

impl FromStr for ParseMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paired" | "pair" => Ok(Self::Paired),
            "uniform" | "uniform_value" | "uniform-value" => Ok(Self::UniformValue),
            other => Err(format!("unknown parse mode: {other}")),
        }
    }
}
