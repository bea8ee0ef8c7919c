//! Native token amounts.
//!
//! Amounts are fixed-point integers (u128) counted in wei, the smallest unit
//! of the chain's native token. One whole token is `10^18` wei. Parsing and
//! arithmetic are exact; nothing goes through floating point.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Number of decimal places between one whole token and one wei.
pub const DECIMALS: usize = 18;

/// Wei in one whole token.
pub const WEI_PER_TOKEN: u128 = 1_000_000_000_000_000_000;

/// An amount of the chain's native token, stored as raw wei.
///
/// Serializes as its decimal token string (`"1.5"`), so JSON stays exact.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NativeAmount(u128);

impl NativeAmount {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u128::MAX);

    pub fn from_wei(wei: u128) -> Self {
        Self(wei)
    }

    /// Whole tokens, e.g. `from_tokens(5)` is 5 * 10^18 wei.
    pub fn from_tokens(tokens: u64) -> Self {
        Self(u128::from(tokens) * WEI_PER_TOKEN)
    }

    pub fn wei(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Sum of all amounts, or `None` on overflow.
    pub fn checked_sum<'a>(amounts: impl IntoIterator<Item = &'a NativeAmount>) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::ZERO, |acc, a| acc.checked_add(*a))
    }

    /// Parse a decimal token amount such as `"1"`, `"0.25"`, `".5"` or `"+3."`.
    ///
    /// Accepts at most [`DECIMALS`] fractional digits. Signs other than a
    /// leading `+`, exponents, separators and non-finite words are rejected.
    pub fn from_decimal_str(s: &str) -> Result<Self, TypeError> {
        let trimmed = s.trim();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if unsigned.is_empty() {
            return Err(TypeError::EmptyAmount);
        }

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(TypeError::MalformedAmount(trimmed.to_string()));
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(TypeError::MalformedAmount(trimmed.to_string()));
        }
        if frac_part.len() > DECIMALS {
            return Err(TypeError::TooManyDecimals {
                max: DECIMALS,
                found: frac_part.len(),
            });
        }

        let whole = if int_part.is_empty() {
            0
        } else {
            int_part
                .parse::<u128>()
                .map_err(|_| TypeError::AmountOverflow)?
        };
        let frac = if frac_part.is_empty() {
            0
        } else {
            // At most 18 digits, always fits.
            let digits = frac_part
                .parse::<u128>()
                .map_err(|_| TypeError::MalformedAmount(trimmed.to_string()))?;
            digits * 10u128.pow((DECIMALS - frac_part.len()) as u32)
        };

        whole
            .checked_mul(WEI_PER_TOKEN)
            .and_then(|w| w.checked_add(frac))
            .map(Self)
            .ok_or(TypeError::AmountOverflow)
    }

    /// Format with exactly `places` fractional digits, rounding half up.
    ///
    /// `format_fixed(4)` matches how balances and totals are shown to users.
    pub fn format_fixed(&self, places: usize) -> String {
        let places = places.min(DECIMALS);
        let scale = 10u128.pow((DECIMALS - places) as u32);
        let mut scaled = self.0 / scale;
        if scale > 1 && self.0 % scale >= scale / 2 {
            scaled += 1;
        }
        let unit = 10u128.pow(places as u32);
        let whole = scaled / unit;
        if places == 0 {
            return whole.to_string();
        }
        format!("{}.{:0width$}", whole, scaled % unit, width = places)
    }
}

impl FromStr for NativeAmount {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl TryFrom<String> for NativeAmount {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_decimal_str(&s)
    }
}

impl From<NativeAmount> for String {
    fn from(amount: NativeAmount) -> Self {
        amount.to_string()
    }
}

/// Shortest exact decimal form: `1`, `0.5`, `1234.000001`.
impl fmt::Display for NativeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / WEI_PER_TOKEN;
        let frac = self.0 % WEI_PER_TOKEN;
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{:018}", frac);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<NativeAmount, TypeError> {
        NativeAmount::from_decimal_str(s)
    }

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse("1").unwrap(), NativeAmount::from_tokens(1));
        assert_eq!(parse("0.5").unwrap().wei(), WEI_PER_TOKEN / 2);
        assert_eq!(parse(".5").unwrap().wei(), WEI_PER_TOKEN / 2);
        assert_eq!(parse("3.").unwrap(), NativeAmount::from_tokens(3));
        assert_eq!(parse("+2").unwrap(), NativeAmount::from_tokens(2));
        assert_eq!(parse(" 7 ").unwrap(), NativeAmount::from_tokens(7));
        assert_eq!(parse("0.000000000000000001").unwrap().wei(), 1);
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(parse(""), Err(TypeError::EmptyAmount));
        assert_eq!(parse("+"), Err(TypeError::EmptyAmount));
        assert!(matches!(parse("."), Err(TypeError::MalformedAmount(_))));
        assert!(matches!(parse("-1"), Err(TypeError::MalformedAmount(_))));
        assert!(matches!(parse("1e3"), Err(TypeError::MalformedAmount(_))));
        assert!(matches!(parse("NaN"), Err(TypeError::MalformedAmount(_))));
        assert!(matches!(parse("Infinity"), Err(TypeError::MalformedAmount(_))));
        assert!(matches!(parse("1.2.3"), Err(TypeError::MalformedAmount(_))));
        assert!(matches!(parse("1,5"), Err(TypeError::MalformedAmount(_))));
    }

    #[test]
    fn rejects_more_than_eighteen_decimals() {
        assert_eq!(
            parse("0.0000000000000000001"),
            Err(TypeError::TooManyDecimals { max: 18, found: 19 })
        );
    }

    #[test]
    fn rejects_amounts_beyond_u128() {
        assert_eq!(parse("340282366920938463464"), Err(TypeError::AmountOverflow));
        assert_eq!(
            parse("99999999999999999999999999999999999999999"),
            Err(TypeError::AmountOverflow)
        );
    }

    #[test]
    fn display_is_shortest_exact_form() {
        assert_eq!(NativeAmount::from_tokens(6).to_string(), "6");
        assert_eq!(parse("1.50").unwrap().to_string(), "1.5");
        assert_eq!(NativeAmount::from_wei(1).to_string(), "0.000000000000000001");
        assert_eq!(NativeAmount::ZERO.to_string(), "0");
    }

    #[test]
    fn format_fixed_rounds_half_up() {
        assert_eq!(parse("1.23455").unwrap().format_fixed(4), "1.2346");
        assert_eq!(parse("1.23454").unwrap().format_fixed(4), "1.2345");
        assert_eq!(parse("0.99999").unwrap().format_fixed(4), "1.0000");
        assert_eq!(NativeAmount::ZERO.format_fixed(4), "0.0000");
        assert_eq!(parse("2.5").unwrap().format_fixed(0), "3");
    }

    #[test]
    fn serializes_as_decimal_string() {
        let amount = parse("0.25").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"0.25\"");
        let back: NativeAmount = serde_json::from_str("\"0.25\"").unwrap();
        assert_eq!(back, amount);
    }

    #[test]
    fn subtraction_never_wraps() {
        let one = NativeAmount::from_tokens(1);
        let two = NativeAmount::from_tokens(2);
        assert_eq!(one.checked_sub(two), None);
        assert_eq!(one.saturating_sub(two), NativeAmount::ZERO);
        assert_eq!(two.checked_sub(one), Some(one));
        assert_eq!(NativeAmount::MAX.checked_add(one), None);
    }

    #[test]
    fn checked_sum_reports_overflow() {
        let amounts = [NativeAmount::MAX, NativeAmount::from_wei(1)];
        assert_eq!(NativeAmount::checked_sum(&amounts), None);

        let amounts = [NativeAmount::from_tokens(1), NativeAmount::from_tokens(2)];
        assert_eq!(
            NativeAmount::checked_sum(&amounts),
            Some(NativeAmount::from_tokens(3))
        );
    }
}
