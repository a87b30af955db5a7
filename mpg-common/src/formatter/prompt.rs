//! "Sound Prompt" formatter
//!
//! Renders a selection matrix as a headline sentence (lead-in, descriptor
//! groups, tempo/key tail) plus an optional lyrics line.

use crate::schema::{Category, GenreKey, SchemaRegistry};
use crate::selection::SelectionMatrix;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;

const HEADLINE_PREFIX: &str = "Sound Prompt:";
const LYRICS_PREFIX: &str = "Lyrics (optional):";
const INSTRUMENTAL: &str = "instrumental (no vocals)";

/// Category bundles rendered after "with", in output order
const DESCRIPTOR_GROUPS: [&[Category]; 6] = [
    &[Category::GenreStyle],
    &[
        Category::LeadInstrument,
        Category::ChordProgression,
        Category::HarmonicMovement,
        Category::SecondaryMelodic,
    ],
    &[
        Category::AmbientElements,
        Category::SoundEffects,
        Category::SpatialElements,
    ],
    &[
        Category::DrumKitStyle,
        Category::KickPattern,
        Category::SnareClapStyle,
        Category::HiHatPattern,
    ],
    &[
        Category::BassType,
        Category::BassPatternStyle,
        Category::BassToneCharacter,
        Category::BassAccents,
    ],
    &[
        Category::MixStyle,
        Category::EffectsProcessing,
        Category::EraTimePeriod,
    ],
];

static BPM_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]{2,3})\s*-\s*([0-9]{2,3})\s*bpm").expect("valid BPM range pattern")
});
static BPM_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{2,3})\s*bpm").expect("valid BPM pattern"));
static KEY_MODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)(\s+)(major|minor)$").expect("valid key pattern"));

/// Extract a BPM from free text such as `"90-100 BPM"` or `"140 BPM"`
///
/// Ranges resolve to their midpoint rounded half up. Zero is not a tempo.
pub fn parse_bpm(text: &str) -> Option<u32> {
    let lower = text.to_lowercase();
    if let Some(caps) = BPM_RANGE.captures(&lower) {
        let a: u32 = caps[1].parse().ok()?;
        let b: u32 = caps[2].parse().ok()?;
        return Some((a + b + 1) / 2).filter(|bpm| *bpm > 0);
    }
    BPM_SINGLE
        .captures(&lower)
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .filter(|bpm| *bpm > 0)
}

/// Lowercase a trailing `Major`/`Minor`, leaving the rest untouched
pub fn format_key(text: &str) -> String {
    match KEY_MODE.captures(text) {
        Some(caps) => format!("{}{}{}", &caps[1], &caps[2], caps[3].to_lowercase()),
        None => text.to_string(),
    }
}

/// Trim, drop empties, de-duplicate (first occurrence wins) and join with ", "
fn join_list<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let mut items: Vec<&str> = Vec::new();
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !items.contains(&value) {
            items.push(value);
        }
    }
    items.join(", ")
}

/// First value with visible text, trimmed
fn first_non_blank<'a>(values: &[&'a str]) -> Option<&'a str> {
    values.iter().map(|v| v.trim()).find(|v| !v.is_empty())
}

fn lead_in(genres: &[GenreKey]) -> String {
    match genres {
        [] => String::new(),
        [only] => format!("{} vibe", only.label()),
        _ => {
            let labels: Vec<&str> = genres.iter().take(3).map(|g| g.label()).collect();
            let suffix = if genres.len() == 2 { "hybrid" } else { "fusion" };
            format!("{} {}", labels.join("/"), suffix)
        }
    }
}

/// Render the selection matrix as a sound prompt
///
/// Returns an empty string when no cell carries a value. Cells whose
/// section or row is unknown to the registry are skipped.
pub fn format_prompt(registry: &SchemaRegistry, selections: &SelectionMatrix) -> String {
    let mut by_category: HashMap<Category, Vec<&str>> = HashMap::new();
    let mut genres: Vec<GenreKey> = Vec::new();
    let mut any_value = false;

    for (key, cell) in selections.iter() {
        let Some(value) = cell.value() else { continue };
        any_value = true;
        let Some(category) = registry.category_at(key.section, key.row) else {
            debug!("Skipping selection {} with no matching category", key);
            continue;
        };
        by_category.entry(category).or_default().push(value);
        if let Some(genre) = &cell.genre {
            if !genres.contains(genre) {
                genres.push(genre.clone());
            }
        }
    }

    if !any_value {
        return String::new();
    }

    let values = |category: Category| {
        by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    };

    let vibe_prefix = first_non_blank(values(Category::OverallVibe))
        .map(|vibe| format!("{} ", vibe))
        .unwrap_or_default();
    let lead = format!("{}{}", vibe_prefix, lead_in(&genres));

    let mut descriptors: Vec<String> = DESCRIPTOR_GROUPS
        .iter()
        .map(|group| join_list(group.iter().flat_map(|c| values(*c).iter().copied())))
        .filter(|joined| !joined.is_empty())
        .collect();
    if let Some(time_sig) = first_non_blank(values(Category::TimeSignature)) {
        descriptors.push(format!("{} timing", time_sig));
    }

    let mut headline = format!("{} {}", HEADLINE_PREFIX, lead.trim());
    if !descriptors.is_empty() {
        headline.push_str(" with ");
        headline.push_str(&descriptors.join(", "));
    }
    let mut headline = headline.trim().to_string();

    let bpm = values(Category::BpmTempo).iter().find_map(|v| parse_bpm(v));
    let key = first_non_blank(values(Category::KeyScale)).map(format_key);
    let tail: Vec<String> = bpm
        .map(|bpm| format!("{} bpm", bpm))
        .into_iter()
        .chain(key)
        .collect();
    if !tail.is_empty() {
        headline.push_str(", ");
        headline.push_str(&tail.join(", "));
    }

    let lyrics = join_list(
        values(Category::VocalLyrical)
            .iter()
            .copied()
            .filter(|v| v.to_lowercase() != INSTRUMENTAL),
    );

    debug!(
        "Formatted prompt from {} cells ({} genres, {} descriptor groups)",
        selections.len(),
        genres.len(),
        descriptors.len()
    );

    if lyrics.is_empty() {
        headline
    } else {
        format!("{}\n{} {}", headline, LYRICS_PREFIX, lyrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Genre, Section, SectionId, OPTION_TABLE};
    use crate::selection::{CellKey, SelectionCell};

    fn matrix(cells: &[(SectionId, usize, Genre, &str)]) -> SelectionMatrix {
        cells
            .iter()
            .map(|(s, r, g, v)| (CellKey::new(*s, *r), SelectionCell::new(*g, *v)))
            .collect()
    }

    #[test]
    fn test_parse_bpm_range_midpoint() {
        assert_eq!(parse_bpm("90-100 BPM"), Some(95));
        assert_eq!(parse_bpm("70-80 BPM"), Some(75));
        assert_eq!(parse_bpm("130-140 BPM (Trap)"), Some(135));
        assert_eq!(parse_bpm("70 - 81 bpm"), Some(76));
    }

    #[test]
    fn test_parse_bpm_single() {
        assert_eq!(parse_bpm("140 BPM"), Some(140));
        assert_eq!(parse_bpm("around 92bpm"), Some(92));
    }

    #[test]
    fn test_parse_bpm_rejects_other_text() {
        assert_eq!(parse_bpm("Fast"), None);
        assert_eq!(parse_bpm("5 BPM"), None);
        assert_eq!(parse_bpm("00 BPM"), None);
    }

    #[test]
    fn test_format_key_lowercases_mode() {
        assert_eq!(format_key("C Major"), "C major");
        assert_eq!(format_key("A Minor"), "A minor");
        assert_eq!(format_key("F# MINOR"), "F# minor");
        assert_eq!(format_key("D Dorian"), "D Dorian");
        assert_eq!(format_key("Major"), "Major");
    }

    #[test]
    fn test_join_list_dedups_case_sensitive() {
        assert_eq!(join_list([" Warm ", "warm", "Warm", ""]), "Warm, warm");
    }

    #[test]
    fn test_lead_in_by_genre_count() {
        let g = |genre: Genre| GenreKey::Known(genre);
        assert_eq!(lead_in(&[]), "");
        assert_eq!(lead_in(&[g(Genre::Lofi)]), "Lo-Fi vibe");
        assert_eq!(lead_in(&[g(Genre::Lofi), g(Genre::Trap)]), "Lo-Fi/Trap hybrid");
        assert_eq!(
            lead_in(&[g(Genre::Lofi), g(Genre::Trap), g(Genre::Edm), g(Genre::Rnb)]),
            "Lo-Fi/Trap/EDM fusion"
        );
    }

    #[test]
    fn test_full_headline_order() {
        let m = matrix(&[
            (SectionId::Production, 0, Genre::Lofi, "Dusty Vintage"),
            (SectionId::Rhythm, 0, Genre::Lofi, "Dusty Vinyl"),
            (SectionId::Core, 0, Genre::Lofi, "Lo-Fi Hip-Hop"),
            (SectionId::Bass, 0, Genre::Lofi, "Warm 808"),
            (SectionId::Melodic, 0, Genre::Lofi, "Dusty Piano"),
            (SectionId::Texture, 0, Genre::Lofi, "Analog Strings"),
            (SectionId::Core, 3, Genre::Lofi, "Swing 4/4"),
            (SectionId::Core, 1, Genre::Lofi, "60-70 BPM"),
            (SectionId::Core, 2, Genre::Lofi, "D Minor"),
            (SectionId::Production, 2, Genre::Lofi, "Melancholic"),
        ]);
        let registry = SchemaRegistry::builtin();
        assert_eq!(
            format_prompt(registry, &m),
            "Sound Prompt: Melancholic Lo-Fi vibe with Lo-Fi Hip-Hop, Dusty Piano, \
             Analog Strings, Dusty Vinyl, Warm 808, Dusty Vintage, Swing 4/4 timing, \
             65 bpm, D minor"
        );
    }

    #[test]
    fn test_group_members_follow_category_order_not_insertion() {
        let m = matrix(&[
            (SectionId::Rhythm, 3, Genre::Edm, "Straight 16ths"),
            (SectionId::Rhythm, 0, Genre::Edm, "Analog Drums"),
        ]);
        let out = format_prompt(SchemaRegistry::builtin(), &m);
        assert_eq!(out, "Sound Prompt: EDM vibe with Analog Drums, Straight 16ths");
    }

    #[test]
    fn test_lyrics_line_excludes_instrumental() {
        let m = matrix(&[
            (SectionId::Texture, 1, Genre::Rnb, "INSTRUMENTAL (no vocals)"),
        ]);
        let out = format_prompt(SchemaRegistry::builtin(), &m);
        assert_eq!(out, "Sound Prompt: R&B vibe");

        let m = matrix(&[(SectionId::Texture, 1, Genre::Rnb, "Lead vocal")]);
        let out = format_prompt(SchemaRegistry::builtin(), &m);
        assert_eq!(out, "Sound Prompt: R&B vibe\nLyrics (optional): Lead vocal");
    }

    #[test]
    fn test_first_parsable_bpm_wins() {
        // Tempo declared in two sections so one bucket holds several values
        let sections = vec![
            Section {
                id: SectionId::Core,
                name: "Core",
                categories: &[Category::BpmTempo, Category::KeyScale],
            },
            Section {
                id: SectionId::Rhythm,
                name: "Alt",
                categories: &[Category::BpmTempo, Category::KeyScale],
            },
        ];
        let registry = SchemaRegistry::new(sections, OPTION_TABLE);
        let m = matrix(&[
            (SectionId::Core, 0, Genre::Dubstep, "Half-time feel"),
            (SectionId::Rhythm, 0, Genre::Dubstep, "150 BPM"),
            (SectionId::Core, 1, Genre::Dubstep, "E Minor"),
            (SectionId::Rhythm, 1, Genre::Dubstep, "A Minor"),
        ]);
        assert_eq!(
            format_prompt(&registry, &m),
            "Sound Prompt: Dubstep vibe, 150 bpm, E minor"
        );
    }

    #[test]
    fn test_blank_time_key_and_vibe_are_skipped() {
        let m = matrix(&[
            (SectionId::Core, 0, Genre::Lofi, "Dusty Lo-Fi"),
            (SectionId::Core, 3, Genre::Lofi, "   "),
            (SectionId::Core, 2, Genre::Lofi, "   "),
            (SectionId::Production, 2, Genre::Lofi, " "),
        ]);
        assert_eq!(
            format_prompt(SchemaRegistry::builtin(), &m),
            "Sound Prompt: Lo-Fi vibe with Dusty Lo-Fi"
        );
    }

    #[test]
    fn test_time_key_and_vibe_are_trimmed() {
        let m = matrix(&[
            (SectionId::Production, 2, Genre::Edm, "  Euphoric "),
            (SectionId::Core, 3, Genre::Edm, " 4/4 "),
            (SectionId::Core, 2, Genre::Edm, " F Minor "),
        ]);
        assert_eq!(
            format_prompt(SchemaRegistry::builtin(), &m),
            "Sound Prompt: Euphoric EDM vibe with 4/4 timing, F minor"
        );
    }

    #[test]
    fn test_whitespace_only_value_contributes_nothing() {
        let m = matrix(&[
            (SectionId::Core, 0, Genre::Gospel, "   "),
        ]);
        let out = format_prompt(SchemaRegistry::builtin(), &m);
        assert_eq!(out, "Sound Prompt: Gospel vibe");
    }
}
