//! Schema registry: genres, sections, categories and the option matrix
//!
//! The registry is static for the lifetime of the process. Categories are
//! addressed positionally by `(SectionId, row)`; the enumerated [`Category`]
//! carries the display label.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

mod options;

pub use options::OPTION_TABLE;

/// Music genres offered by the grid, in canonical declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Chillhop,
    Lofi,
    Neosoul,
    Rnb,
    Hiphop,
    Gospel,
    Edm,
    Trap,
    Orchestra,
    Dubstep,
    Reggae,
    Electronica,
}

impl Genre {
    /// All genres in declaration order
    pub const ALL: [Genre; 12] = [
        Genre::Chillhop,
        Genre::Lofi,
        Genre::Neosoul,
        Genre::Rnb,
        Genre::Hiphop,
        Genre::Gospel,
        Genre::Edm,
        Genre::Trap,
        Genre::Orchestra,
        Genre::Dubstep,
        Genre::Reggae,
        Genre::Electronica,
    ];

    /// Stable identifier used in stored selections
    pub fn id(&self) -> &'static str {
        match self {
            Genre::Chillhop => "chillhop",
            Genre::Lofi => "lofi",
            Genre::Neosoul => "neosoul",
            Genre::Rnb => "rnb",
            Genre::Hiphop => "hiphop",
            Genre::Gospel => "gospel",
            Genre::Edm => "edm",
            Genre::Trap => "trap",
            Genre::Orchestra => "orchestra",
            Genre::Dubstep => "dubstep",
            Genre::Reggae => "reggae",
            Genre::Electronica => "electronica",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Genre::Chillhop => "Chillhop",
            Genre::Lofi => "Lo-Fi",
            Genre::Neosoul => "Neo-Soul",
            Genre::Rnb => "R&B",
            Genre::Hiphop => "Hip-Hop",
            Genre::Gospel => "Gospel",
            Genre::Edm => "EDM",
            Genre::Trap => "Trap",
            Genre::Orchestra => "Orchestra",
            Genre::Dubstep => "Dubstep",
            Genre::Reggae => "Reggae",
            Genre::Electronica => "Electronica",
        }
    }

    /// Look up a genre by its identifier
    pub fn from_id(id: &str) -> Option<Genre> {
        Genre::ALL.iter().copied().find(|g| g.id() == id)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Genre {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Genre::from_id(s.trim()).ok_or_else(|| Error::InvalidInput(format!("unknown genre: {}", s)))
    }
}

/// Genre reference held by a selection cell
///
/// Stored selections may name a genre that no longer exists; such ids are
/// kept verbatim and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenreKey {
    Known(Genre),
    Unknown(String),
}

impl GenreKey {
    /// Parse a raw identifier, keeping unrecognized ids
    pub fn parse(id: &str) -> GenreKey {
        match Genre::from_id(id) {
            Some(genre) => GenreKey::Known(genre),
            None => GenreKey::Unknown(id.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            GenreKey::Known(genre) => genre.id(),
            GenreKey::Unknown(raw) => raw,
        }
    }

    /// Display label; unknown ids fall back to the raw id
    pub fn label(&self) -> &str {
        match self {
            GenreKey::Known(genre) => genre.label(),
            GenreKey::Unknown(raw) => raw,
        }
    }

    pub fn known(&self) -> Option<Genre> {
        match self {
            GenreKey::Known(genre) => Some(*genre),
            GenreKey::Unknown(_) => None,
        }
    }
}

impl From<Genre> for GenreKey {
    fn from(genre: Genre) -> Self {
        GenreKey::Known(genre)
    }
}

impl fmt::Display for GenreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for GenreKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for GenreKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(GenreKey::parse(&raw))
    }
}

/// Section identifiers in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Core,
    Rhythm,
    Bass,
    Melodic,
    Texture,
    Production,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Core,
        SectionId::Rhythm,
        SectionId::Bass,
        SectionId::Melodic,
        SectionId::Texture,
        SectionId::Production,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            SectionId::Core => "core",
            SectionId::Rhythm => "rhythm",
            SectionId::Bass => "bass",
            SectionId::Melodic => "melodic",
            SectionId::Texture => "texture",
            SectionId::Production => "production",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        SectionId::ALL.iter().copied().find(|s| s.id() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SectionId::from_id(s.trim())
            .ok_or_else(|| Error::InvalidInput(format!("unknown section: {}", s)))
    }
}

/// A selectable dimension within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GenreStyle,
    BpmTempo,
    KeyScale,
    TimeSignature,
    DrumKitStyle,
    KickPattern,
    SnareClapStyle,
    HiHatPattern,
    BassType,
    BassPatternStyle,
    BassToneCharacter,
    BassAccents,
    LeadInstrument,
    ChordProgression,
    HarmonicMovement,
    SecondaryMelodic,
    AmbientElements,
    VocalLyrical,
    SoundEffects,
    SpatialElements,
    MixStyle,
    EffectsProcessing,
    OverallVibe,
    EraTimePeriod,
}

impl Category {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Category::GenreStyle => "Genre/Style",
            Category::BpmTempo => "BPM/Tempo",
            Category::KeyScale => "Key/Scale",
            Category::TimeSignature => "Time Signature",
            Category::DrumKitStyle => "Drum Kit Style",
            Category::KickPattern => "Kick Pattern",
            Category::SnareClapStyle => "Snare/Clap Style",
            Category::HiHatPattern => "Hi-hat Pattern",
            Category::BassType => "Bass Type",
            Category::BassPatternStyle => "Bass Pattern/Style",
            Category::BassToneCharacter => "Bass Tone/Character",
            Category::BassAccents => "Bass Accents",
            Category::LeadInstrument => "Lead Instrument",
            Category::ChordProgression => "Chord Progression",
            Category::HarmonicMovement => "Harmonic Movement",
            Category::SecondaryMelodic => "Secondary Melodic",
            Category::AmbientElements => "Ambient Elements",
            Category::VocalLyrical => "Vocal/Lyrical",
            Category::SoundEffects => "Sound Effects",
            Category::SpatialElements => "Spatial Elements",
            Category::MixStyle => "Mix Style",
            Category::EffectsProcessing => "Effects Processing",
            Category::OverallVibe => "Overall Vibe",
            Category::EraTimePeriod => "Era/Time Period",
        }
    }

    /// Compact label used by the detailed breakdown
    pub fn short_label(&self) -> &'static str {
        match self {
            Category::GenreStyle => "Style",
            Category::BpmTempo => "Tempo",
            Category::KeyScale => "Key",
            Category::TimeSignature => "Time",
            other => other.label(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named, ordered group of categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub name: &'static str,
    pub categories: &'static [Category],
}

/// Builtin music sections in declaration order
pub const SECTIONS: [Section; 6] = [
    Section {
        id: SectionId::Core,
        name: "Core Foundation",
        categories: &[
            Category::GenreStyle,
            Category::BpmTempo,
            Category::KeyScale,
            Category::TimeSignature,
        ],
    },
    Section {
        id: SectionId::Rhythm,
        name: "Rhythm Section",
        categories: &[
            Category::DrumKitStyle,
            Category::KickPattern,
            Category::SnareClapStyle,
            Category::HiHatPattern,
        ],
    },
    Section {
        id: SectionId::Bass,
        name: "Bass Foundation",
        categories: &[
            Category::BassType,
            Category::BassPatternStyle,
            Category::BassToneCharacter,
            Category::BassAccents,
        ],
    },
    Section {
        id: SectionId::Melodic,
        name: "Melodic Elements",
        categories: &[
            Category::LeadInstrument,
            Category::ChordProgression,
            Category::HarmonicMovement,
            Category::SecondaryMelodic,
        ],
    },
    Section {
        id: SectionId::Texture,
        name: "Texture & Atmosphere",
        categories: &[
            Category::AmbientElements,
            Category::VocalLyrical,
            Category::SoundEffects,
            Category::SpatialElements,
        ],
    },
    Section {
        id: SectionId::Production,
        name: "Production & Character",
        categories: &[
            Category::MixStyle,
            Category::EffectsProcessing,
            Category::OverallVibe,
            Category::EraTimePeriod,
        ],
    },
];

/// Phrase lists for one `(section, category)` slot: `None` marks the
/// genre-independent default
#[derive(Debug, Clone, Copy)]
pub struct OptionEntry {
    pub section: SectionId,
    pub category: Category,
    pub lists: &'static [(Option<Genre>, &'static [&'static str])],
}

/// Resolved candidate lists for one `(section, category)` slot
#[derive(Debug, Clone, Default)]
pub struct CategoryOptions {
    by_genre: HashMap<Genre, &'static [&'static str]>,
    default: Option<&'static [&'static str]>,
}

impl CategoryOptions {
    fn from_entry(entry: &OptionEntry) -> Self {
        let mut options = CategoryOptions::default();
        for (genre, phrases) in entry.lists {
            match genre {
                Some(genre) => {
                    options.by_genre.insert(*genre, *phrases);
                }
                None => options.default = Some(*phrases),
            }
        }
        options
    }

    /// Two-tier resolution: genre-specific list if non-empty, else default, else empty
    pub fn resolve(&self, genre: Genre) -> &'static [&'static str] {
        match self.by_genre.get(&genre) {
            Some(list) if !list.is_empty() => list,
            _ => self.default.unwrap_or(&[]),
        }
    }
}

static BUILTIN: Lazy<SchemaRegistry> =
    Lazy::new(|| SchemaRegistry::new(SECTIONS.to_vec(), OPTION_TABLE));

/// Sections plus option matrix
///
/// Lookups never fail: unknown sections, rows or categories resolve to
/// `None` or an empty option list.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    sections: Vec<Section>,
    options: HashMap<(SectionId, Category), CategoryOptions>,
}

impl SchemaRegistry {
    /// Build a registry from sections and an option table
    ///
    /// Each entry is keyed by its own `(section, category)`. Entries for a
    /// section or category the sections do not declare are ignored.
    pub fn new(sections: Vec<Section>, table: &[OptionEntry]) -> Self {
        let mut options = HashMap::new();
        for entry in table {
            let declared = sections
                .iter()
                .any(|s| s.id == entry.section && s.categories.contains(&entry.category));
            if declared {
                options.insert(
                    (entry.section, entry.category),
                    CategoryOptions::from_entry(entry),
                );
            } else {
                debug!(
                    "Ignoring options for undeclared slot {} / {}",
                    entry.section, entry.category
                );
            }
        }
        Self { sections, options }
    }

    /// Process-wide music registry
    pub fn builtin() -> &'static SchemaRegistry {
        &BUILTIN
    }

    /// Sections in declaration order
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Position of a section in declaration order
    pub fn section_order(&self, id: SectionId) -> Option<usize> {
        self.sections.iter().position(|s| s.id == id)
    }

    /// Resolve a row index to its category
    pub fn category_at(&self, section: SectionId, row: usize) -> Option<Category> {
        self.section(section)
            .and_then(|s| s.categories.get(row))
            .copied()
    }

    pub fn genres(&self) -> &'static [Genre] {
        &Genre::ALL
    }

    pub fn genre_label<'a>(&self, genre: &'a GenreKey) -> &'a str {
        genre.label()
    }

    /// Candidate phrases for a `(section, category, genre)` triple
    pub fn get_options(
        &self,
        section: SectionId,
        category: Category,
        genre: Genre,
    ) -> &'static [&'static str] {
        match self.options.get(&(section, category)) {
            Some(options) => options.resolve(genre),
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_ids_round_trip_labels() {
        assert_eq!(Genre::from_id("lofi"), Some(Genre::Lofi));
        assert_eq!(Genre::Lofi.label(), "Lo-Fi");
        assert_eq!(Genre::Rnb.label(), "R&B");
        assert!(Genre::from_id("polka").is_none());
        assert!("polka".parse::<Genre>().is_err());
    }

    #[test]
    fn test_genre_key_unknown_uses_raw_label() {
        let key = GenreKey::parse("vaporwave");
        assert_eq!(key, GenreKey::Unknown("vaporwave".to_string()));
        assert_eq!(key.label(), "vaporwave");
        assert_eq!(GenreKey::parse("trap").label(), "Trap");
    }

    #[test]
    fn test_genre_key_serde_as_plain_string() {
        let json = serde_json::to_string(&GenreKey::Known(Genre::Edm)).unwrap();
        assert_eq!(json, "\"edm\"");
        let back: GenreKey = serde_json::from_str("\"gone\"").unwrap();
        assert_eq!(back, GenreKey::Unknown("gone".to_string()));
    }

    #[test]
    fn test_category_at_is_positional() {
        let registry = SchemaRegistry::builtin();
        assert_eq!(registry.category_at(SectionId::Core, 0), Some(Category::GenreStyle));
        assert_eq!(registry.category_at(SectionId::Texture, 1), Some(Category::VocalLyrical));
        assert_eq!(registry.category_at(SectionId::Production, 3), Some(Category::EraTimePeriod));
        assert_eq!(registry.category_at(SectionId::Core, 4), None);
    }

    #[test]
    fn test_section_order_follows_declaration() {
        let registry = SchemaRegistry::builtin();
        let order: Vec<_> = SectionId::ALL
            .iter()
            .map(|id| registry.section_order(*id).unwrap())
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_get_options_genre_specific() {
        let registry = SchemaRegistry::builtin();
        let opts = registry.get_options(SectionId::Core, Category::GenreStyle, Genre::Lofi);
        assert_eq!(opts, &["Lo-Fi Hip-Hop", "Dusty Lo-Fi", "Bedroom Lo-Fi"]);
    }

    #[test]
    fn test_get_options_falls_back_to_default() {
        let registry = SchemaRegistry::builtin();
        let opts = registry.get_options(SectionId::Bass, Category::BassAccents, Genre::Trap);
        assert_eq!(opts, &["Slides", "Ghost Notes", "Octaves"]);
        let vocals =
            registry.get_options(SectionId::Texture, Category::VocalLyrical, Genre::Gospel);
        assert_eq!(vocals[0], "Instrumental (no vocals)");
    }

    #[test]
    fn test_get_options_unknown_slot_is_empty() {
        let registry = SchemaRegistry::builtin();
        // Category declared in another section
        let opts = registry.get_options(SectionId::Core, Category::BassType, Genre::Lofi);
        assert!(opts.is_empty());
    }

    #[test]
    fn test_empty_genre_list_uses_default() {
        static ENTRY: [OptionEntry; 1] = [OptionEntry {
            section: SectionId::Production,
            category: Category::MixStyle,
            lists: &[(Some(Genre::Edm), &[]), (None, &["Balanced"])],
        }];
        let registry = SchemaRegistry::new(vec![SECTIONS[5].clone()], &ENTRY);
        assert_eq!(
            registry.get_options(SectionId::Production, Category::MixStyle, Genre::Edm),
            &["Balanced"]
        );
        // No list at all for this category
        assert!(registry
            .get_options(SectionId::Production, Category::OverallVibe, Genre::Edm)
            .is_empty());
    }

    #[test]
    fn test_same_category_resolves_per_section() {
        static TABLE: [OptionEntry; 2] = [
            OptionEntry {
                section: SectionId::Core,
                category: Category::BpmTempo,
                lists: &[(None, &["60-70 BPM", "70-80 BPM"])],
            },
            OptionEntry {
                section: SectionId::Rhythm,
                category: Category::BpmTempo,
                lists: &[(Some(Genre::Dubstep), &["140 BPM"]), (None, &["Half-time"])],
            },
        ];
        let sections = vec![
            Section {
                id: SectionId::Core,
                name: "Core",
                categories: &[Category::BpmTempo],
            },
            Section {
                id: SectionId::Rhythm,
                name: "Rhythm",
                categories: &[Category::BpmTempo],
            },
        ];
        let registry = SchemaRegistry::new(sections, &TABLE);

        assert_eq!(
            registry.get_options(SectionId::Core, Category::BpmTempo, Genre::Dubstep),
            &["60-70 BPM", "70-80 BPM"]
        );
        assert_eq!(
            registry.get_options(SectionId::Rhythm, Category::BpmTempo, Genre::Dubstep),
            &["140 BPM"]
        );
        assert_eq!(
            registry.get_options(SectionId::Rhythm, Category::BpmTempo, Genre::Lofi),
            &["Half-time"]
        );
    }

    #[test]
    fn test_entry_for_undeclared_slot_is_ignored() {
        static TABLE: [OptionEntry; 1] = [OptionEntry {
            section: SectionId::Bass,
            category: Category::MixStyle,
            lists: &[(None, &["Balanced"])],
        }];
        let registry = SchemaRegistry::new(SECTIONS.to_vec(), &TABLE);
        assert!(registry
            .get_options(SectionId::Bass, Category::MixStyle, Genre::Edm)
            .is_empty());
        assert!(registry
            .get_options(SectionId::Production, Category::MixStyle, Genre::Edm)
            .is_empty());
    }

    #[test]
    fn test_every_genre_has_options_for_every_category() {
        let registry = SchemaRegistry::builtin();
        for section in registry.sections() {
            for category in section.categories {
                for genre in Genre::ALL {
                    assert!(
                        !registry.get_options(section.id, *category, genre).is_empty(),
                        "{} / {} / {}",
                        section.id,
                        category,
                        genre
                    );
                }
            }
        }
    }
}
