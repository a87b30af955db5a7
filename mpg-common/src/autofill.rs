//! Auto-fill: populate every category slot from a set of genres
//!
//! Genres rotate across sections (section `i` uses genre `i % n` after an
//! optional shuffle). Each row picks one candidate phrase at random. The
//! RNG is supplied by the caller so results can be reproduced from a seed.

use crate::schema::{Genre, SchemaRegistry};
use crate::selection::{CellKey, SelectionCell, SelectionMatrix};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Build a fresh selection matrix from `genres`
///
/// `None` (or an empty list) draws from every genre. Rows with no options
/// for the active genre borrow the first non-empty list among all genres;
/// rows with no options anywhere stay unset.
pub fn auto_fill<R: Rng + ?Sized>(
    registry: &SchemaRegistry,
    genres: Option<&[Genre]>,
    rng: &mut R,
) -> SelectionMatrix {
    let mut pool: Vec<Genre> = match genres {
        Some(list) if !list.is_empty() => list.to_vec(),
        _ => registry.genres().to_vec(),
    };
    if pool.len() > 1 {
        pool.shuffle(rng);
    }

    let mut matrix = SelectionMatrix::new();
    for (idx, section) in registry.sections().iter().enumerate() {
        let active = pool[idx % pool.len()];
        for (row, category) in section.categories.iter().enumerate() {
            let mut options = registry.get_options(section.id, *category, active);
            if options.is_empty() {
                options = registry
                    .genres()
                    .iter()
                    .map(|g| registry.get_options(section.id, *category, *g))
                    .find(|list| !list.is_empty())
                    .unwrap_or(&[]);
            }
            let Some(choice) = options.choose(rng) else {
                debug!("No options for {} / {}; leaving unset", section.id, category);
                continue;
            };
            matrix.insert(CellKey::new(section.id, row), SelectionCell::new(active, *choice));
        }
    }

    debug!(
        "Auto-filled {} cells from {} genres",
        matrix.len(),
        pool.len()
    );
    matrix
}
