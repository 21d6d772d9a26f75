//! Reading and writing saved generations.
//!
//! Two on-disk shapes are supported: a plain `(x, y)` cell list for sparse
//! sets and a JSON session file for dense grids. Loaders come in two
//! flavours: a fallible one returning [`PersistError`], and a
//! `load_or_default` one that treats any failure as "no prior save".

pub mod cell_list;
pub mod session_file;

use std::path::Path;
use thiserror::Error;

pub use session_file::SessionFile;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid session json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: expected `(x, y)`, found {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("invalid field: {0}")]
    InvalidField(String),
}

pub type Result<T> = std::result::Result<T, PersistError>;

/// Unwrap a load result, logging and substituting `fallback()` on any failure
pub(crate) fn or_fallback<T>(path: &Path, loaded: Result<T>, fallback: impl FnOnce() -> T) -> T {
    match loaded {
        Ok(value) => {
            log::info!("loaded save from {}", path.display());
            value
        }
        Err(PersistError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no save at {}, starting fresh", path.display());
            fallback()
        }
        Err(err) => {
            log::warn!("ignoring unreadable save {}: {}", path.display(), err);
            fallback()
        }
    }
}
