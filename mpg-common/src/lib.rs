//! # MPG Common Library
//!
//! Shared code for the music prompt generator including:
//! - Schema registry (genres, sections, option matrix)
//! - Selection matrix
//! - Prompt and detailed breakdown formatters
//! - Auto-fill and preset naming
//! - In-memory prompt history
//! - Configuration loading

pub mod autofill;
pub mod config;
pub mod error;
pub mod formatter;
pub mod history;
pub mod presets;
pub mod schema;
pub mod selection;

pub use error::{Error, Result};
pub use formatter::{format_detailed, format_prompt};
pub use schema::{Category, Genre, GenreKey, SchemaRegistry, SectionId};
pub use selection::{CellKey, SelectionCell, SelectionMatrix};
