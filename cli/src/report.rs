//! Text and JSON rendering of a disperse plan.

use disperse_gate::{BalanceSummary, GateDecision};
use disperse_parser::{LineIssue, ParseResult, RecipientEntry};
use disperse_types::{NetworkId, Timestamp};
use disperse_utils::{format_age, shorten_hex};
use disperse_wallet_core::{DisperseSession, HistoryRecord};
use serde::Serialize;

/// Everything `disperse plan` reports.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    pub network: NetworkId,
    pub entries: &'a [RecipientEntry],
    pub issues: &'a [LineIssue],
    pub error: Option<String>,
    pub summary: BalanceSummary,
    pub balance_error: Option<&'a str>,
    pub decision: GateDecision,
    pub reason: Option<String>,
}

impl<'a> PlanReport<'a> {
    pub fn from_session(session: &'a DisperseSession) -> Self {
        let parsed: &ParseResult = session.parsed();
        let decision = session.can_submit();
        Self {
            network: session.network(),
            entries: &parsed.entries,
            issues: &parsed.issues,
            error: parsed.error_message(),
            summary: session.summary(),
            balance_error: session.balance_error(),
            decision,
            reason: decision.reason.map(|r| r.to_string()),
        }
    }

    pub fn render_text(&self) -> String {
        let symbol = self.network.currency_symbol();
        let mut out = String::new();

        out.push_str(&format!("{} valid entries found\n", self.entries.len()));
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!("{:>4}. {}  {} {symbol}\n", i + 1, entry.address, entry.value));
        }
        for issue in self.issues {
            out.push_str(&format!("line {}: {}\n", issue.line, issue.kind));
        }
        if let Some(error) = &self.error {
            out.push_str(&format!("error: {error}\n"));
        }

        out.push('\n');
        out.push_str(&self.summary.render(symbol));
        out.push('\n');
        if let Some(err) = self.balance_error {
            out.push_str(&format!("balance lookup failed: {err}\n"));
        }

        out.push('\n');
        match &self.reason {
            None => out.push_str("ready to submit\n"),
            Some(reason) => out.push_str(&format!("cannot submit: {reason}\n")),
        }
        out
    }
}

/// One line per record, newest first.
pub fn render_history(records: &[HistoryRecord], network: NetworkId, now: Timestamp) -> String {
    if records.is_empty() {
        return "No transactions yet\n".to_string();
    }
    let symbol = network.currency_symbol();
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{}  {} addresses  {} {symbol}  {}\n",
            shorten_hex(&record.transaction_hash.to_string()),
            record.recipients.len(),
            record.total_value,
            format_age(record.timestamp, now),
        ));
        if let Some(url) = record.explorer_url(network) {
            out.push_str(&format!("    {url}\n"));
        }
    }
    out
}
