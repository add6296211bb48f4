use super::traits::{HistoryError, HistoryStore};
use crate::core::models::history::HistoryEntry;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A history store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHistory {
    entries: Vec<HistoryEntry>,
}

impl InMemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl HistoryStore for InMemoryHistory {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        self.entries.push(entry);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        Ok(self.entries.clone())
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        self.entries.clear();
        Ok(())
    }
}

/// A history store persisted as a JSON array on disk.
///
/// A missing file reads as an empty log. Every append rewrites the whole array, and clearing
/// deletes the file.
#[derive(Debug, Clone)]
pub struct JsonHistoryFile {
    path: PathBuf,
}

impl JsonHistoryFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> HistoryError {
        HistoryError::Io {
            path: self.path.to_string_lossy().to_string(),
            source,
        }
    }

    fn write_all(&self, entries: &[HistoryEntry]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| HistoryError::Serialization {
                path: self.path.to_string_lossy().to_string(),
                source: e,
            })?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))
    }
}

impl HistoryStore for JsonHistoryFile {
    fn append(&mut self, entry: HistoryEntry) -> Result<(), HistoryError> {
        let mut entries = self.entries()?;
        entries.push(entry);
        debug!(
            "Appending history entry #{} to {:?}",
            entries.len(),
            &self.path
        );
        self.write_all(&entries)
    }

    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&content).map_err(|e| HistoryError::Serialization {
            path: self.path.to_string_lossy().to_string(),
            source: e,
        })
    }

    fn clear(&mut self) -> Result<(), HistoryError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!("Cleared history at {:?}", &self.path);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::trial::Verdict;
    use tempfile::tempdir;

    fn sample_entries() -> Vec<HistoryEntry> {
        vec![
            HistoryEntry::new("chronic pain", "Ibuprofen derivative", Verdict::Failed),
            HistoryEntry::new("infection", "Beta-lactam antibiotic derivative", Verdict::Passed),
        ]
    }

    #[test]
    fn in_memory_history_appends_in_order_and_clears() {
        let mut history = InMemoryHistory::new();
        for entry in sample_entries() {
            history.append(entry).unwrap();
        }

        assert_eq!(history.len(), 2);
        assert_eq!(history.entries().unwrap(), sample_entries());

        history.clear().unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn json_history_reads_missing_file_as_empty() {
        let dir = tempdir().unwrap();
        let history = JsonHistoryFile::new(dir.path().join("history.json"));
        assert!(history.entries().unwrap().is_empty());
    }

    #[test]
    fn json_history_persists_across_instances() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");

        let mut writer = JsonHistoryFile::new(&path);
        for entry in sample_entries() {
            writer.append(entry).unwrap();
        }

        let reader = JsonHistoryFile::new(&path);
        assert_eq!(reader.entries().unwrap(), sample_entries());
    }

    #[test]
    fn json_history_clear_removes_file_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let mut history = JsonHistoryFile::new(&path);
        history.append(sample_entries().remove(0)).unwrap();
        assert!(path.exists());

        history.clear().unwrap();
        assert!(!path.exists());
        assert!(history.entries().unwrap().is_empty());

        history.clear().unwrap();
    }

    #[test]
    fn json_history_reports_malformed_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{ not json").unwrap();

        let history = JsonHistoryFile::new(&path);
        assert!(matches!(
            history.entries(),
            Err(HistoryError::Serialization { .. })
        ));
    }
}
