//! Record of completed disperse transactions.
//!
//! Records are kept newest first. The store is append-only; nothing in the
//! client edits or deletes a record once written.

use disperse_parser::RecipientEntry;
use disperse_types::{EvmAddress, NativeAmount, NetworkId, Timestamp, TxHash};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::WalletError;

/// One successful disperse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub contract_address: EvmAddress,
    pub transaction_hash: TxHash,
    pub total_value: NativeAmount,
    pub recipients: Vec<RecipientEntry>,
    pub timestamp: Timestamp,
}

impl HistoryRecord {
    pub fn explorer_url(&self, network: NetworkId) -> Option<String> {
        network.explorer_tx_url(&self.transaction_hash)
    }
}

/// Append-only sink for history records.
pub trait HistorySink {
    fn append(&mut self, record: HistoryRecord) -> Result<(), WalletError>;

    /// All records, newest first.
    fn records(&self) -> Result<Vec<HistoryRecord>, WalletError>;
}

/// History kept in a single JSON file holding an array of records.
///
/// The file is read and rewritten on every append. A missing file is an
/// empty history.
#[derive(Debug, Clone)]
pub struct JsonHistoryStore {
    path: PathBuf,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for JsonHistoryStore {
    fn append(&mut self, record: HistoryRecord) -> Result<(), WalletError> {
        let mut records = load_history(&self.path)?;
        records.insert(0, record);
        save_history(&records, &self.path)?;
        debug!(path = %self.path.display(), count = records.len(), "history updated");
        Ok(())
    }

    fn records(&self) -> Result<Vec<HistoryRecord>, WalletError> {
        load_history(&self.path)
    }
}

/// Save history records to a JSON file.
pub fn save_history(records: &[HistoryRecord], path: &Path) -> Result<(), WalletError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| WalletError::History(format!("JSON serialization failed: {e}")))?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| WalletError::History(format!("failed to create history dir: {e}")))?;
    }
    std::fs::write(path, json)
        .map_err(|e| WalletError::History(format!("failed to write history file: {e}")))?;
    Ok(())
}

/// Load history records from a JSON file. A missing file yields no records.
pub fn load_history(path: &Path) -> Result<Vec<HistoryRecord>, WalletError> {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(WalletError::History(format!(
                "failed to read history file: {e}"
            )))
        }
    };
    serde_json::from_str(&json)
        .map_err(|e| WalletError::History(format!("invalid history JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use disperse_parser::{parse, ParseMode};

    fn record(tag: u8) -> HistoryRecord {
        let parsed = parse(
            "0x1111111111111111111111111111111111111111,1\n\
             0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA:0.5",
            ParseMode::Paired,
            None,
        );
        HistoryRecord {
            contract_address: EvmAddress::from_bytes([0xcc; 20]),
            transaction_hash: TxHash::new([tag; 32]),
            total_value: parsed.total_amount,
            recipients: parsed.entries,
            timestamp: Timestamp::from_millis(1_700_000_000_000 + u64::from(tag)),
        }
    }

    #[test]
    fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonHistoryStore::new(dir.path().join("nope.json"));
        assert!(store.records().unwrap().is_empty());
    }

    #[test]
    fn append_prepends_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let mut store = JsonHistoryStore::new(&path);
        store.append(record(1)).unwrap();
        store.append(record(2)).unwrap();

        let reopened = JsonHistoryStore::new(&path);
        let records = reopened.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], record(2));
        assert_eq!(records[1], record(1));
    }

    #[test]
    fn json_uses_camel_case_fields() {
        let json = serde_json::to_string(&record(3)).unwrap();
        assert!(json.contains("\"contractAddress\""));
        assert!(json.contains("\"transactionHash\":\"0x0303"));
        assert!(json.contains("\"totalValue\":\"1.5\""));
        assert!(json.contains("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = JsonHistoryStore::new(&path).records().unwrap_err();
        assert!(matches!(err, WalletError::History(_)));
    }

    #[test]
    fn explorer_url_follows_network() {
        let r = record(4);
        assert!(r
            .explorer_url(NetworkId::MonadTestnet)
            .unwrap()
            .ends_with(&r.transaction_hash.to_string()));
        assert_eq!(r.explorer_url(NetworkId::Dev), None);
    }
}
