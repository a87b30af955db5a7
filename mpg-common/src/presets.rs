//! Preset naming
//!
//! Saved prompts get a display label derived from how many genres they
//! draw on: `Shuffle` (none picked), `Solo`, `Hybrid` (2-3) or `Manual`.

use crate::history::SavedPrompt;
use crate::schema::{Genre, GenreKey};
use chrono::{DateTime, TimeZone};
use std::fmt;

const TIMESTAMP_FORMAT: &str = "%m-%d-%y %H:%M";

/// Mode word for a number of selected genres
pub fn mode_word(count: usize) -> &'static str {
    match count {
        0 => "Shuffle",
        1 => "Solo",
        2..=3 => "Hybrid",
        _ => "Manual",
    }
}

/// Name offered when saving a preset from the current genre selection
///
/// `None` means every genre is in play (shuffle mode).
pub fn default_preset_name<Tz>(selected: Option<&[Genre]>, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let (count, genres) = match selected {
        None => (0, "All".to_string()),
        Some(list) => {
            let labels: Vec<&str> = list.iter().take(3).map(|g| g.label()).collect();
            let text = if labels.is_empty() {
                "None".to_string()
            } else {
                labels.join(", ")
            };
            (list.len(), text)
        }
    };
    format!(
        "{}: {} — {}",
        mode_word(count),
        genres,
        at.format(TIMESTAMP_FORMAT)
    )
}

/// Label shown for a saved prompt
///
/// A non-blank stored name wins; otherwise the label summarises the genres
/// referenced by the saved selections.
pub fn derive_preset_label(entry: &SavedPrompt) -> String {
    if let Some(name) = entry.name.as_deref().filter(|n| !n.trim().is_empty()) {
        return name.to_string();
    }

    let mut genres: Vec<&GenreKey> = Vec::new();
    if let Some(selections) = &entry.selections {
        for (_, cell) in selections.iter() {
            if let Some(genre) = &cell.genre {
                if !genres.contains(&genre) {
                    genres.push(genre);
                }
            }
        }
    }

    let names = if genres.is_empty() {
        "All".to_string()
    } else {
        genres
            .iter()
            .take(3)
            .map(|g| g.label())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}: {}", mode_word(genres.len()), names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SectionId;
    use crate::selection::{CellKey, SelectionCell, SelectionMatrix};
    use chrono::Utc;

    fn saved(name: Option<&str>, selections: Option<SelectionMatrix>) -> SavedPrompt {
        SavedPrompt {
            id: uuid::Uuid::new_v4(),
            text: "Sound Prompt: x".to_string(),
            created_at: Utc::now(),
            name: name.map(str::to_string),
            selections,
        }
    }

    #[test]
    fn test_mode_word_thresholds() {
        assert_eq!(mode_word(0), "Shuffle");
        assert_eq!(mode_word(1), "Solo");
        assert_eq!(mode_word(2), "Hybrid");
        assert_eq!(mode_word(3), "Hybrid");
        assert_eq!(mode_word(4), "Manual");
    }

    #[test]
    fn test_default_preset_name_formats_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 0).unwrap();
        assert_eq!(
            default_preset_name(Some(&[Genre::Lofi, Genre::Rnb]), &at),
            "Hybrid: Lo-Fi, R&B — 03-07-24 09:05"
        );
        assert_eq!(default_preset_name(None, &at), "Shuffle: All — 03-07-24 09:05");
        assert_eq!(default_preset_name(Some(&[]), &at), "Shuffle: None — 03-07-24 09:05");
    }

    #[test]
    fn test_default_preset_name_shows_three_genres() {
        let at = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
        let picked = [Genre::Edm, Genre::Trap, Genre::Dubstep, Genre::Gospel];
        assert_eq!(
            default_preset_name(Some(&picked), &at),
            "Manual: EDM, Trap, Dubstep — 12-31-25 23:59"
        );
    }

    #[test]
    fn test_derive_label_prefers_name() {
        assert_eq!(derive_preset_label(&saved(Some("Late night"), None)), "Late night");
        assert_eq!(derive_preset_label(&saved(Some("   "), None)), "Shuffle: All");
    }

    #[test]
    fn test_derive_label_from_selections() {
        let mut m = SelectionMatrix::new();
        m.insert(CellKey::new(SectionId::Core, 0), SelectionCell::new(Genre::Neosoul, "Neo-Soul"));
        m.insert(CellKey::new(SectionId::Core, 1), SelectionCell::new(Genre::Neosoul, "85-95 BPM"));
        m.insert(CellKey::new(SectionId::Bass, 0), SelectionCell::new(Genre::Hiphop, "Deep 808"));
        assert_eq!(derive_preset_label(&saved(None, Some(m))), "Hybrid: Neo-Soul, Hip-Hop");
    }
}
