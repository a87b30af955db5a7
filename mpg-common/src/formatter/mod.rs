//! Prompt formatters
//!
//! Both formatters are pure functions of the registry and the selection
//! matrix. They are recomputed on every change; nothing is cached.

mod detailed;
mod prompt;

pub use detailed::format_detailed;
pub use prompt::{format_key, format_prompt, parse_bpm};

use crate::schema::SchemaRegistry;
use crate::selection::SelectionMatrix;

/// Both renderings of one matrix
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub prompt: String,
    pub detailed: String,
}

/// Run both formatters over the same matrix
pub fn render(registry: &SchemaRegistry, selections: &SelectionMatrix) -> Rendered {
    Rendered {
        prompt: format_prompt(registry, selections),
        detailed: format_detailed(registry, selections),
    }
}
