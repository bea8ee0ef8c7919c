//! Nullable history store: in-memory, optionally failing.

use disperse_wallet_core::{HistoryRecord, HistorySink, WalletError};

/// History kept in a `Vec`, newest first.
#[derive(Default)]
pub struct NullHistory {
    records: Vec<HistoryRecord>,
    fail_writes: bool,
}

impl NullHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every append fails.
    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail_writes: true,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistorySink for NullHistory {
    fn append(&mut self, record: HistoryRecord) -> Result<(), WalletError> {
        if self.fail_writes {
            return Err(WalletError::History("write refused".into()));
        }
        self.records.insert(0, record);
        Ok(())
    }

    fn records(&self) -> Result<Vec<HistoryRecord>, WalletError> {
        Ok(self.records.clone())
    }
}
