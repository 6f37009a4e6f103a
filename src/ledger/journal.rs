//! Write-ahead sale journal

use std::sync::Mutex;

use thiserror::Error;

use crate::domain::aggregates::SaleRecord;

/// Error raised by a journal backend. Callers treat it as transient and
/// may retry the whole sale.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct JournalError(String);

impl JournalError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Write-ahead log for sale records.
///
/// The ledger journals every sale after the stock check and before the
/// decrement; a failure here aborts the sale with no partial effect.
/// The stream append is the commit point, not the journal write, so
/// implementations must tolerate entries whose sale never committed.
pub trait SaleJournal: Send + Sync {
    fn append(&self, record: &SaleRecord) -> Result<(), JournalError>;
}

/// In-memory journal holding each record as a JSON line.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    lines: Mutex<Vec<String>>,
}

impl MemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

impl SaleJournal for MemoryJournal {
    fn append(&self, record: &SaleRecord) -> Result<(), JournalError> {
        let line = serde_json::to_string(record).map_err(|e| JournalError::new(e.to_string()))?;
        self.lines
            .lock()
            .map_err(|_| JournalError::new("journal mutex poisoned"))?
            .push(line);
        Ok(())
    }
}
