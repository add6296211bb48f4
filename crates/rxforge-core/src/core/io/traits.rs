use crate::core::models::history::HistoryEntry;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Malformed history log '{path}': {source}")]
    Serialization {
        path: String,
        source: serde_json::Error,
    },
}

/// An append-only log of past trials.
///
/// Entries are only ever appended or wholly cleared, never edited in place. Implementors own
/// the persistence; callers receive the store by injection rather than reaching for ambient
/// state.
pub trait HistoryStore {
    /// Appends one entry to the end of the log.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or written.
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError>;

    /// Returns every entry in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read or is malformed.
    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError>;

    /// Removes every entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be removed.
    fn clear(&mut self) -> Result<(), HistoryError>;
}
