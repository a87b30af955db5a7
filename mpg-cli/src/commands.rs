//! Command implementations
//!
//! Each function returns the text the binary prints on stdout.

use crate::history_store::HistoryStore;
use crate::select_arg::parse_select;
use chrono::{DateTime, Local};
use mpg_common::autofill::auto_fill;
use mpg_common::formatter::render;
use mpg_common::history::PromptHistory;
use mpg_common::presets::{default_preset_name, derive_preset_label};
use mpg_common::{Error, Genre, Result, SchemaRegistry, SectionId, SelectionMatrix};
use rand::Rng;
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, warn};
use uuid::Uuid;

/// `mpg genres`
pub fn list_genres(registry: &SchemaRegistry) -> String {
    let mut out = String::new();
    for genre in registry.genres() {
        let _ = writeln!(out, "{:<12} {}", genre.id(), genre.label());
    }
    out
}

/// `mpg sections`
pub fn list_sections(registry: &SchemaRegistry) -> String {
    let mut out = String::new();
    for section in registry.sections() {
        let _ = writeln!(out, "{} ({})", section.name, section.id);
        for (row, category) in section.categories.iter().enumerate() {
            let _ = writeln!(out, "  {}-{}  {}", section.id, row, category.label());
        }
    }
    out
}

/// `mpg options <section> <row> <genre>`
pub fn list_options(
    registry: &SchemaRegistry,
    section: SectionId,
    row: usize,
    genre: Genre,
) -> Result<String> {
    let category = registry.category_at(section, row).ok_or_else(|| {
        Error::InvalidInput(format!("section {} has no row {}", section, row))
    })?;
    let mut out = String::new();
    for option in registry.get_options(section, category, genre) {
        let _ = writeln!(out, "{}", option);
    }
    Ok(out)
}

/// Assemble a matrix from an optional JSON file plus `--select` arguments
///
/// File cells come first; `--select` arguments override or extend them.
pub fn build_matrix(selects: &[String], input: Option<&Path>) -> Result<SelectionMatrix> {
    let mut matrix = match input {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str::<SelectionMatrix>(&content)?
        }
        None => SelectionMatrix::new(),
    };
    for arg in selects {
        let (key, cell) = parse_select(arg)?;
        matrix.set(key, cell.genre, cell.value);
    }
    Ok(matrix)
}

/// Prompt text, followed by the breakdown when `detailed` is set
pub fn render_matrix(
    registry: &SchemaRegistry,
    matrix: &SelectionMatrix,
    detailed: bool,
) -> String {
    let rendered = render(registry, matrix);
    let mut out = rendered.prompt;
    if detailed && !rendered.detailed.is_empty() {
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(&rendered.detailed);
    }
    out
}

/// Append a rendered prompt to the history file
///
/// Returns the id of the stored entry, or `None` if the prompt was empty.
pub fn record(
    store: &HistoryStore,
    prompt: &str,
    matrix: &SelectionMatrix,
    name: Option<String>,
) -> Result<Option<Uuid>> {
    let mut history = store.load()?;
    let Some(id) = history
        .add(prompt, Some(matrix.clone()), name)
        .map(|entry| entry.id)
    else {
        warn!("Empty prompt; nothing recorded");
        return Ok(None);
    };
    store.save(&history)?;
    info!("Recorded prompt {} in {}", id, store.path().display());
    Ok(Some(id))
}

/// `mpg autofill`
///
/// Repeated genres count once, in first-given order. Returns the filled
/// matrix and the preset name offered for it.
pub fn autofill<R: Rng + ?Sized>(
    registry: &SchemaRegistry,
    genres: &[Genre],
    at: &DateTime<Local>,
    rng: &mut R,
) -> (SelectionMatrix, String) {
    let mut unique: Vec<Genre> = Vec::with_capacity(genres.len());
    for genre in genres {
        if !unique.contains(genre) {
            unique.push(*genre);
        }
    }
    let selected = (!unique.is_empty()).then_some(unique.as_slice());
    let matrix = auto_fill(registry, selected, rng);
    let name = default_preset_name(selected, at);
    (matrix, name)
}

/// `mpg history list`
pub fn list_history(history: &PromptHistory) -> String {
    let mut out = String::new();
    for entry in history.entries() {
        let _ = writeln!(
            out,
            "{}  {}  {}",
            entry.id,
            entry.created_at.format("%Y-%m-%d %H:%M"),
            derive_preset_label(entry)
        );
        for line in entry.text.lines() {
            let _ = writeln!(out, "    {}", line);
        }
    }
    out
}

/// `mpg history rename <id> <name>`
pub fn rename_history(store: &HistoryStore, id: Uuid, name: &str) -> Result<()> {
    let mut history = store.load()?;
    history.rename(id, name)?;
    store.save(&history)
}

/// `mpg history clear`
pub fn clear_history(store: &HistoryStore) -> Result<()> {
    let mut history = store.load()?;
    history.clear();
    store.save(&history)
}
