//! Recipient list parsing for batch native-token transfers.
//!
//! Turns free-form pasted text into an ordered list of validated
//! `(address, amount)` entries plus their exact total. Parsing is total:
//! malformed lines are reported in the result, never as an `Err`.
//!
//! Accepted line formats in [`ParseMode::Paired`]:
//!
//! ```text
//! 0x1111111111111111111111111111111111111111,1
//! 0x2222222222222222222222222222222222222222:2.5
//! 0x3333333333333333333333333333333333333333 0.125
//! ```

pub mod entry;
pub mod error;
pub mod mode;
pub mod parse;
pub mod separator;

pub use entry::{LineIssue, ParseResult, RecipientEntry};
pub use error::ParseErrorKind;
pub use mode::ParseMode;
pub use parse::{parse, parse_amount};
pub use separator::Separator;
