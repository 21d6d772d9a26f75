//! One live cell per line, written as `(x, y)`.

use super::{PersistError, Result, or_fallback};
use crate::domain::{Coord, Generation, SparseCellSet};
use std::fs;
use std::path::Path;

pub fn format_cell((x, y): Coord) -> String {
    format!("({}, {})", x, y)
}

/// Parse a single `(x, y)` line
pub fn parse_cell(text: &str) -> Option<Coord> {
    let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
    let (x, y) = inner.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Render a set as text, ordered by row then column
pub fn to_string(cells: &SparseCellSet) -> String {
    cells
        .sorted()
        .into_iter()
        .map(|coord| format_cell(coord) + "\n")
        .collect()
}

/// Parse a whole file's contents. Blank lines are skipped; anything else
/// that is not a cell fails the parse.
pub fn from_str(text: &str) -> Result<SparseCellSet> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_cell(line).ok_or_else(|| PersistError::MalformedLine {
                line: idx + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

pub fn save(path: impl AsRef<Path>, cells: &SparseCellSet) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_string(cells))?;
    log::info!("saved {} cells to {}", cells.population(), path.display());
    Ok(())
}

pub fn load(path: impl AsRef<Path>) -> Result<SparseCellSet> {
    from_str(&fs::read_to_string(path)?)
}

/// Load a cell list, or an empty set when the file is missing or malformed
pub fn load_or_empty(path: impl AsRef<Path>) -> SparseCellSet {
    let path = path.as_ref();
    or_fallback(path, load(path), SparseCellSet::new)
}
