//! Parsing of `--select KEY=GENRE:VALUE` arguments
//!
//! `KEY` is a cell key such as `core-0`. `GENRE` may be left empty
//! (`core-0=:House`) for a cell with no genre. Everything after the first
//! `:` is the value, so values may themselves contain colons.

use mpg_common::selection::{CellKey, SelectionCell};
use mpg_common::{Error, GenreKey, Result};

pub fn parse_select(arg: &str) -> Result<(CellKey, SelectionCell)> {
    let (key, rest) = arg
        .split_once('=')
        .ok_or_else(|| Error::InvalidInput(format!("expected KEY=GENRE:VALUE, got {:?}", arg)))?;
    let key: CellKey = key.trim().parse()?;

    let (genre, value) = rest.split_once(':').ok_or_else(|| {
        Error::InvalidInput(format!("missing ':' between genre and value in {:?}", arg))
    })?;
    let genre = genre.trim();
    let genre = (!genre.is_empty()).then(|| GenreKey::parse(genre));
    let value = value.trim();

    if genre.is_none() && value.is_empty() {
        return Err(Error::InvalidInput(format!("empty selection: {:?}", arg)));
    }

    Ok((
        key,
        SelectionCell {
            genre,
            value: (!value.is_empty()).then(|| value.to_string()),
        },
    ))
}
