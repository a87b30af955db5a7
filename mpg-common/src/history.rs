//! In-memory prompt history
//!
//! Most recent first, de-duplicated by prompt text and capped at a fixed
//! number of entries. Persisting the list is left to the caller; the type is
//! serde-friendly for that purpose.

use crate::selection::SelectionMatrix;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default number of entries kept
pub const DEFAULT_HISTORY_LIMIT: usize = 30;

/// One recorded prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPrompt {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selections: Option<SelectionMatrix>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptHistory {
    #[serde(default = "default_limit")]
    limit: usize,
    #[serde(default)]
    entries: Vec<SavedPrompt>,
}

fn default_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

impl Default for PromptHistory {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl PromptHistory {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            entries: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the cap, dropping the oldest entries if needed
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.entries.truncate(self.limit);
    }

    /// Entries, most recent first
    pub fn entries(&self) -> &[SavedPrompt] {
        &self.entries
    }

    pub fn get(&self, id: Uuid) -> Option<&SavedPrompt> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Record a prompt at the front
    ///
    /// An existing entry with identical text is replaced. Blank text is not
    /// recorded and yields `None`.
    pub fn add(
        &mut self,
        text: impl Into<String>,
        selections: Option<SelectionMatrix>,
        name: Option<String>,
    ) -> Option<&SavedPrompt> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        let entry = SavedPrompt {
            id: Uuid::new_v4(),
            text,
            created_at: Utc::now(),
            name,
            selections,
        };
        self.entries.retain(|e| e.text != entry.text);
        self.entries.insert(0, entry);
        self.entries.truncate(self.limit);
        self.entries.first()
    }

    pub fn rename(&mut self, id: Uuid, name: impl Into<String>) -> Result<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("history entry {}", id)))?;
        entry.name = Some(name.into());
        Ok(())
    }

    pub fn remove(&mut self, id: Uuid) -> Result<SavedPrompt> {
        let idx = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("history entry {}", id)))?;
        Ok(self.entries.remove(idx))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_puts_newest_first() {
        let mut h = PromptHistory::default();
        h.add("first", None, None);
        h.add("second", None, None);
        let texts: Vec<_> = h.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["second", "first"]);
    }

    #[test]
    fn test_add_dedups_by_text() {
        let mut h = PromptHistory::default();
        h.add("same", None, None);
        h.add("other", None, None);
        h.add("same", None, Some("again".into()));
        assert_eq!(h.len(), 2);
        assert_eq!(h.entries()[0].text, "same");
        assert_eq!(h.entries()[0].name.as_deref(), Some("again"));
    }

    #[test]
    fn test_add_caps_entries() {
        let mut h = PromptHistory::with_limit(3);
        for i in 0..5 {
            h.add(format!("prompt {}", i), None, None);
        }
        let texts: Vec<_> = h.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["prompt 4", "prompt 3", "prompt 2"]);
    }

    #[test]
    fn test_blank_text_not_recorded() {
        let mut h = PromptHistory::default();
        assert!(h.add("  ", None, None).is_none());
        assert!(h.is_empty());
    }

    #[test]
    fn test_rename_and_remove() {
        let mut h = PromptHistory::default();
        let id = h.add("keep me", None, None).unwrap().id;
        h.rename(id, "Favourite").unwrap();
        assert_eq!(h.get(id).unwrap().name.as_deref(), Some("Favourite"));

        let removed = h.remove(id).unwrap();
        assert_eq!(removed.text, "keep me");
        assert!(matches!(h.rename(id, "x"), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_set_limit_truncates() {
        let mut h = PromptHistory::default();
        for i in 0..10 {
            h.add(format!("p{}", i), None, None);
        }
        h.set_limit(4);
        assert_eq!(h.len(), 4);
        assert_eq!(h.entries()[0].text, "p9");
    }

    #[test]
    fn test_json_round_trip_keeps_selections() {
        use crate::schema::{Genre, SectionId};
        use crate::selection::{CellKey, SelectionCell};

        let mut m = SelectionMatrix::new();
        m.insert(CellKey::new(SectionId::Core, 0), SelectionCell::new(Genre::Lofi, "Dusty Lo-Fi"));
        let mut h = PromptHistory::default();
        h.add("Sound Prompt: Lo-Fi vibe with Dusty Lo-Fi", Some(m.clone()), None);

        let json = serde_json::to_string(&h).unwrap();
        let back: PromptHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back.entries()[0].selections.as_ref(), Some(&m));
    }
}
