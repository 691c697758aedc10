//! Bulk input parsing.
//!
//! Turns the content of an import file (or stdin) into a desired set of
//! variables. No I/O happens here.

use std::collections::HashMap;

use tracing::debug;

use crate::core::domain::{Format, Variable};
use crate::error::ParseError;

/// Parse import content in the given format.
///
/// Empty content yields an empty set in either format.
///
/// # Errors
///
/// Returns `ParseError::Json` or `ParseError::DotenvLine` when the content does
/// not match the format's syntax.
pub fn parse(content: &str, format: Format) -> Result<Vec<Variable>, ParseError> {
    let vars = match format {
        Format::Json => parse_json(content)?,
        Format::Dotenv => parse_dotenv(content)?,
    };
    debug!(%format, count = vars.len(), "parsed input");
    Ok(vars)
}

/// JSON input: an array of `{"name": "...", "value": "..."}`, order kept.
fn parse_json(content: &str) -> Result<Vec<Variable>, ParseError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content).map_err(ParseError::Json)
}

/// Dotenv input: standard `KEY=VALUE` syntax.
///
/// Entries come back in file order. A key repeated later in the file keeps
/// its first position but takes the last value. `$` is always literal: no
/// variable is expanded, from the file or from the process environment.
fn parse_dotenv(content: &str) -> Result<Vec<Variable>, ParseError> {
    let escaped = escape_dollars(content);
    let mut vars: Vec<Variable> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in dotenvy::from_read_iter(escaped.as_bytes()) {
        let (name, value) = item.map_err(|e| locate_error(e, content, &escaped))?;
        match index.get(&name) {
            Some(&i) => vars[i] = Variable::new(name, value),
            None => {
                index.insert(name.clone(), vars.len());
                vars.push(Variable::new(name, value));
            }
        }
    }

    Ok(vars)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Double,
    Single,
}

/// Backslash-escape every `$` dotenvy would substitute.
///
/// Follows dotenvy's lexing: single quotes are verbatim, a backslash
/// escapes the next character outside them, and `#` starts a comment at
/// the beginning of a line or after whitespace. Only `\` is inserted, so
/// line numbers are unchanged.
fn escape_dollars(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut quote = Quote::None;
    let mut escaped = false;
    let mut comment = false;
    let mut line_start = true;
    let mut prev = '\n';

    for c in content.chars() {
        if comment {
            if c == '\n' {
                comment = false;
                line_start = true;
            }
        } else if escaped {
            escaped = false;
        } else if line_start && c.is_whitespace() {
            // indentation, blank lines
        } else if line_start && c == '#' {
            comment = true;
        } else {
            line_start = false;
            match quote {
                Quote::Single => {
                    if c == '\'' {
                        quote = Quote::None;
                    }
                }
                Quote::Double => match c {
                    '"' => quote = Quote::None,
                    '\\' => escaped = true,
                    '$' => out.push('\\'),
                    _ => {}
                },
                Quote::None => match c {
                    '\'' => quote = Quote::Single,
                    '"' => quote = Quote::Double,
                    '\\' => escaped = true,
                    '$' => out.push('\\'),
                    '#' if prev == ' ' || prev == '\t' => comment = true,
                    '\n' => line_start = true,
                    _ => {}
                },
            }
        }
        out.push(c);
        prev = c;
    }

    out
}

/// Point a dotenvy line error at the line as the user wrote it.
fn locate_error(err: dotenvy::Error, content: &str, escaped: &str) -> ParseError {
    let dotenvy::Error::LineParse(fragment, _) = &err else {
        return ParseError::Dotenv(err);
    };
    let fragment = fragment.trim_end().to_string();
    let Some(at) = escaped.find(&fragment).filter(|_| !fragment.is_empty()) else {
        return ParseError::Dotenv(err);
    };

    let line = escaped[..at].matches('\n').count();
    match content.lines().nth(line) {
        Some(text) => ParseError::DotenvLine {
            line: line + 1,
            content: text.to_string(),
        },
        None => ParseError::Dotenv(err),
    }
}
