//! JSON file persistence for the prompt history

use mpg_common::history::PromptHistory;
use mpg_common::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// History file on disk
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
    limit: usize,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>, limit: usize) -> Self {
        Self {
            path: path.into(),
            limit,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the history
    ///
    /// A missing file is an empty history. A file that cannot be decoded is
    /// reported and also treated as empty; it is replaced on the next save.
    pub fn load(&self) -> Result<PromptHistory> {
        if !self.path.exists() {
            debug!("No history file at {}", self.path.display());
            return Ok(PromptHistory::with_limit(self.limit));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let mut history = match serde_json::from_str::<PromptHistory>(&content) {
            Ok(history) => history,
            Err(e) => {
                warn!(
                    "History file {} is corrupt ({}); starting with an empty history",
                    self.path.display(),
                    e
                );
                return Ok(PromptHistory::with_limit(self.limit));
            }
        };
        history.set_limit(self.limit);
        debug!("Loaded {} history entries", history.len());
        Ok(history)
    }

    /// Write the history atomically (temp file + rename)
    pub fn save(&self, history: &PromptHistory) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(history)?;
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, content)?;
        std::fs::rename(&temp, &self.path)?;
        debug!("Saved {} history entries to {}", history.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("h.json"), 30);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = HistoryStore::new(dir.path().join("sub").join("h.json"), 30);
        let mut history = store.load().unwrap();
        history.add("Sound Prompt: Trap vibe", None, Some("night".into()));
        store.save(&history).unwrap();

        let back = store.load().unwrap();
        assert_eq!(back, history);
        assert!(!dir.path().join("sub").join("h.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("h.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = HistoryStore::new(&path, 30);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_configured_limit_applies_on_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("h.json");
        let wide = HistoryStore::new(&path, 30);
        let mut history = wide.load().unwrap();
        for i in 0..6 {
            history.add(format!("prompt {}", i), None, None);
        }
        wide.save(&history).unwrap();

        let narrow = HistoryStore::new(&path, 2);
        let loaded = narrow.load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.limit(), 2);
        assert_eq!(loaded.entries()[0].text, "prompt 5");
    }
}
