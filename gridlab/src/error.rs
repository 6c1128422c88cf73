use std::fmt;
use std::io;
use std::path::PathBuf;

use gridsearch_core::MapError;
use gridsearch_paths::SearchError;

/// Errors that stop a `gridlab` run.
#[derive(Debug)]
pub enum HarnessError {
    /// The map file could not be parsed.
    Map { path: PathBuf, source: MapError },
    /// Start or goal is unusable on the chosen grid.
    Search(SearchError),
    /// Reading a map or writing output failed.
    Io(io::Error),
    /// The command line asked for something inconsistent.
    Config(String),
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Search(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Map { source, .. } => Some(source),
            Self::Search(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::Config(_) => None,
        }
    }
}

impl From<SearchError> for HarnessError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
