//! Detailed breakdown: selections grouped by genre, one line per category

use crate::schema::{Category, SchemaRegistry};
use crate::selection::SelectionMatrix;
use tracing::debug;

struct Entry<'a> {
    section_order: usize,
    row: usize,
    category: Category,
    value: &'a str,
}

/// Render the per-genre breakdown
///
/// Only cells with both a genre and a value are listed. Within a genre,
/// entries follow section declaration order then row index, regardless of
/// the order they were picked in.
pub fn format_detailed(registry: &SchemaRegistry, selections: &SelectionMatrix) -> String {
    let mut groups: Vec<(&str, Vec<Entry<'_>>)> = Vec::new();

    for (key, cell) in selections.iter() {
        let (Some(genre), Some(value)) = (&cell.genre, cell.value()) else {
            continue;
        };
        let (Some(section_order), Some(category)) = (
            registry.section_order(key.section),
            registry.category_at(key.section, key.row),
        ) else {
            debug!("Leaving {} out of the breakdown: unknown slot", key);
            continue;
        };

        let label = registry.genre_label(genre);
        let entry = Entry {
            section_order,
            row: key.row,
            category,
            value,
        };
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, entries)) => entries.push(entry),
            None => groups.push((label, vec![entry])),
        }
    }

    let mut lines: Vec<String> = Vec::new();
    for (label, mut entries) in groups {
        entries.sort_by_key(|e| (e.section_order, e.row));
        lines.push(format!("[GENRE]{}[/GENRE]:", label));
        for entry in entries {
            lines.push(format!("- {}: {}", entry.category.short_label(), entry.value));
        }
        lines.push(String::new());
    }

    lines.join("\n").trim().to_string()
}
