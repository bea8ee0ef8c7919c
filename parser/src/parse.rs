//! Line-by-line parsing of pasted recipient lists.

use disperse_types::{EvmAddress, NativeAmount};
use tracing::debug;

use crate::entry::{LineIssue, ParseResult, RecipientEntry};
use crate::error::ParseErrorKind;
use crate::mode::ParseMode;
use crate::separator::Separator;

/// Parse `text` into validated recipient entries.
///
/// Blank lines are skipped. In [`ParseMode::Paired`] the separator is looked
/// for in the line as written, and only the two fields are trimmed, so
/// leading or trailing whitespace can act as the separator. Each line is
/// handled on its own: a bad
/// line is recorded and parsing moves on to the next one. `error` holds the
/// failure of the last bad line; `issues` holds all of them.
///
/// In [`ParseMode::UniformValue`] every line is an address and
/// `uniform_amount` is the amount for each of them. A missing or invalid
/// shared amount rejects every line.
pub fn parse(text: &str, mode: ParseMode, uniform_amount: Option<&str>) -> ParseResult {
    let mut result = ParseResult::default();

    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let outcome = match mode {
            ParseMode::Paired => parse_paired_line(line),
            ParseMode::UniformValue => parse_uniform_line(line.trim(), uniform_amount),
        }
        .and_then(|entry| {
            let total = result
                .total_amount
                .checked_add(entry.amount)
                .ok_or(ParseErrorKind::TotalOverflow)?;
            Ok((entry, total))
        });

        match outcome {
            Ok((entry, total)) => {
                result.total_amount = total;
                result.entries.push(entry);
            }
            Err(kind) => {
                result.error = Some(kind);
                result.issues.push(LineIssue {
                    line: index + 1,
                    kind,
                });
            }
        }
    }

    debug!(
        %mode,
        entries = result.entries.len(),
        rejected = result.issues.len(),
        total = %result.total_amount,
        "parsed recipient list"
    );

    result
}

fn parse_paired_line(line: &str) -> Result<RecipientEntry, ParseErrorKind> {
    let separator = Separator::detect(line).ok_or(ParseErrorKind::InvalidFormat)?;
    let (address, value) = separator
        .split(line)
        .ok_or(ParseErrorKind::InvalidFormat)?;
    let (address, value) = (address.trim(), value.trim());
    if address.is_empty() || value.is_empty() {
        return Err(ParseErrorKind::MissingField);
    }
    build_entry(address, value)
}

fn parse_uniform_line(
    line: &str,
    uniform_amount: Option<&str>,
) -> Result<RecipientEntry, ParseErrorKind> {
    build_entry(line, uniform_amount.unwrap_or("").trim())
}

fn build_entry(address: &str, value: &str) -> Result<RecipientEntry, ParseErrorKind> {
    let address = EvmAddress::parse(address).map_err(|_| ParseErrorKind::InvalidAddress)?;
    let amount = parse_amount(value)?;
    Ok(RecipientEntry {
        address,
        value: value.to_string(),
        amount,
    })
}

/// A strictly positive decimal amount.
pub fn parse_amount(value: &str) -> Result<NativeAmount, ParseErrorKind> {
    match NativeAmount::from_decimal_str(value) {
        Ok(amount) if !amount.is_zero() => Ok(amount),
        _ => Err(ParseErrorKind::InvalidAmount),
    }
}
