//! Input format for bulk imports.

use std::str::FromStr;

use crate::error::ParseError;

/// Syntax of a bulk import source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Array of `{"name": ..., "value": ...}` objects
    Json,
    /// `KEY=VALUE` lines
    #[default]
    Dotenv,
}

impl FromStr for Format {
    type Err = ParseError;

    /// An empty string selects the default (`dotenv`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Format::Json),
            "dotenv" | "" => Ok(Format::Dotenv),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Dotenv => write!(f, "dotenv"),
        }
    }
}
