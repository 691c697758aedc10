//! Where bulk input is read from.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
}

impl Source {
    /// `None` reads standard input.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Source::Stdin, Source::File)
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => write!(f, "stdin"),
        }
    }
}
