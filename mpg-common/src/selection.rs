//! Selection matrix: one user choice per `(section, row)` slot
//!
//! The matrix is an ordered association list. Iteration follows insertion
//! order; updating an existing key keeps its position. The JSON form is an
//! object keyed by `"{section}-{row}"` and preserves key order.

use crate::schema::{GenreKey, SectionId};
use crate::{Error, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Address of one category slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub section: SectionId,
    pub row: usize,
}

impl CellKey {
    pub fn new(section: SectionId, row: usize) -> Self {
        Self { section, row }
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.section, self.row)
    }
}

impl FromStr for CellKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (section, row) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidInput(format!("malformed cell key: {}", s)))?;
        let section = section.parse::<SectionId>()?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::InvalidInput(format!("malformed row in cell key: {}", s)))?;
        Ok(CellKey { section, row })
    }
}

/// One user choice
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCell {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<GenreKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl SelectionCell {
    pub fn new(genre: impl Into<GenreKey>, value: impl Into<String>) -> Self {
        Self {
            genre: Some(genre.into()),
            value: Some(value.into()),
        }
    }

    /// Non-empty value, if any. Empty strings count as unset.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn is_set(&self) -> bool {
        self.value().is_some()
    }
}

/// Sparse, ordered mapping from [`CellKey`] to [`SelectionCell`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionMatrix {
    cells: Vec<(CellKey, SelectionCell)>,
}

impl SelectionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a choice
    ///
    /// A cell with neither genre nor value removes the key instead, so an
    /// unset slot is always represented by absence.
    pub fn set(&mut self, key: CellKey, genre: Option<GenreKey>, value: Option<String>) {
        let value = value.filter(|v| !v.is_empty());
        if genre.is_none() && value.is_none() {
            self.remove(&key);
            return;
        }
        self.insert(key, SelectionCell { genre, value });
    }

    /// Insert or overwrite a cell, keeping the key's existing position
    pub fn insert(&mut self, key: CellKey, cell: SelectionCell) {
        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = cell,
            None => self.cells.push((key, cell)),
        }
    }

    pub fn remove(&mut self, key: &CellKey) -> Option<SelectionCell> {
        let idx = self.cells.iter().position(|(k, _)| k == key)?;
        Some(self.cells.remove(idx).1)
    }

    pub fn get(&self, key: &CellKey) -> Option<&SelectionCell> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Replace all cells wholesale (preset load, auto-fill)
    pub fn replace(&mut self, other: SelectionMatrix) {
        *self = other;
    }

    /// Cells in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &SelectionCell)> {
        self.cells.iter().map(|(k, c)| (k, c))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Build from raw string keys, dropping keys that do not decode
    pub fn from_raw<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, SelectionCell)>,
        K: AsRef<str>,
    {
        let mut matrix = SelectionMatrix::new();
        for (raw, cell) in entries {
            match raw.as_ref().parse::<CellKey>() {
                Ok(key) => matrix.insert(key, cell),
                Err(e) => debug!("Dropping selection {:?}: {}", raw.as_ref(), e),
            }
        }
        matrix
    }
}

impl FromIterator<(CellKey, SelectionCell)> for SelectionMatrix {
    fn from_iter<T: IntoIterator<Item = (CellKey, SelectionCell)>>(iter: T) -> Self {
        let mut matrix = SelectionMatrix::new();
        for (key, cell) in iter {
            matrix.insert(key, cell);
        }
        matrix
    }
}

impl Serialize for SelectionMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (key, cell) in &self.cells {
            map.serialize_entry(&key.to_string(), cell)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SelectionMatrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MatrixVisitor;

        impl<'de> Visitor<'de> for MatrixVisitor {
            type Value = SelectionMatrix;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of \"section-row\" keys to selection cells")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, SelectionCell)> = Vec::new();
                while let Some((key, cell)) =
                    access.next_entry::<String, Option<SelectionCell>>()?
                {
                    if let Some(cell) = cell {
                        entries.push((key, cell));
                    }
                }
                Ok(SelectionMatrix::from_raw(entries))
            }
        }

        deserializer.deserialize_map(MatrixVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Genre;

    fn key(section: SectionId, row: usize) -> CellKey {
        CellKey::new(section, row)
    }

    #[test]
    fn test_cell_key_display_and_parse() {
        let k = key(SectionId::Rhythm, 2);
        assert_eq!(k.to_string(), "rhythm-2");
        assert_eq!("rhythm-2".parse::<CellKey>().unwrap(), k);
        assert!("vocals-0".parse::<CellKey>().is_err());
        assert!("core-x".parse::<CellKey>().is_err());
        assert!("core".parse::<CellKey>().is_err());
    }

    #[test]
    fn test_set_keeps_position_on_update() {
        let mut m = SelectionMatrix::new();
        m.set(key(SectionId::Core, 0), Some(Genre::Lofi.into()), Some("A".into()));
        m.set(key(SectionId::Core, 1), Some(Genre::Lofi.into()), Some("B".into()));
        m.set(key(SectionId::Core, 0), Some(Genre::Trap.into()), Some("C".into()));

        let order: Vec<_> = m.iter().map(|(k, c)| (k.row, c.value().unwrap())).collect();
        assert_eq!(order, vec![(0, "C"), (1, "B")]);
    }

    #[test]
    fn test_set_with_nothing_removes_key() {
        let mut m = SelectionMatrix::new();
        m.set(key(SectionId::Bass, 3), Some(Genre::Edm.into()), Some("Slides".into()));
        m.set(key(SectionId::Bass, 3), None, Some(String::new()));
        assert!(m.is_empty());
    }

    #[test]
    fn test_remove_then_readd_moves_to_end() {
        let mut m = SelectionMatrix::new();
        m.insert(key(SectionId::Core, 0), SelectionCell::new(Genre::Lofi, "A"));
        m.insert(key(SectionId::Core, 1), SelectionCell::new(Genre::Lofi, "B"));
        m.remove(&key(SectionId::Core, 0));
        m.insert(key(SectionId::Core, 0), SelectionCell::new(Genre::Lofi, "A"));

        let rows: Vec<_> = m.iter().map(|(k, _)| k.row).collect();
        assert_eq!(rows, vec![1, 0]);
    }

    #[test]
    fn test_empty_value_is_unset() {
        let cell = SelectionCell {
            genre: Some(Genre::Gospel.into()),
            value: Some(String::new()),
        };
        assert!(!cell.is_set());
        assert_eq!(cell.value(), None);
    }

    #[test]
    fn test_json_preserves_order_and_drops_bad_keys() {
        let json = r#"{
            "production-2": {"genre": "edm", "value": "Dance Euphoric"},
            "vocals-0": {"genre": "edm", "value": "stale"},
            "core-0": {"genre": "lofi", "value": "Lo-Fi Hip-Hop"},
            "core-1": null
        }"#;
        let m: SelectionMatrix = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = m.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, vec!["production-2", "core-0"]);

        let out = serde_json::to_string(&m).unwrap();
        assert!(out.starts_with(r#"{"production-2":{"genre":"edm","value":"Dance Euphoric"}"#));
    }

    #[test]
    fn test_json_keeps_unknown_genre() {
        let m: SelectionMatrix =
            serde_json::from_str(r#"{"core-0": {"genre": "polka", "value": "Oompah"}}"#).unwrap();
        let cell = m.get(&key(SectionId::Core, 0)).unwrap();
        assert_eq!(cell.genre, Some(GenreKey::Unknown("polka".to_string())));
    }
}
