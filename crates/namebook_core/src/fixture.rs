//! JSON fixture loading for bulk initialization.
//!
//! # Responsibility
//! - Read `{"names": [...]}` documents from disk or memory.
//!
//! # Invariants
//! - Loading never mutates a store; callers pass the result to `set_all`.

use crate::model::fixture::NameFixture;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type FixtureResult<T> = Result<T, FixtureError>;

#[derive(Debug)]
pub enum FixtureError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read fixture `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid fixture document: {err}"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses a fixture from JSON text.
pub fn parse_fixture(json: &str) -> FixtureResult<NameFixture> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a fixture file.
///
/// # Errors
/// - `Io` when the file cannot be read.
/// - `Parse` when the content is not a valid fixture document.
pub fn load_fixture(path: impl AsRef<Path>) -> FixtureResult<NameFixture> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixture(&json)
}
