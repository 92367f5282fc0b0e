//! Base-name normalization for output files.
//!
//! Layer and file names arrive as free text ("My Icon 2"); output files
//! need a single predictable form. Normalization lowercases the name and
//! collapses each internal whitespace run to one separator character.
//! Whether punctuation beyond whitespace is dropped is a policy choice,
//! off by default.

use crate::error::{DpxError, Result};

/// Separator substituted for whitespace runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Underscore,
    Hyphen,
}

impl Separator {
    pub fn as_char(&self) -> char {
        match self {
            Separator::Underscore => '_',
            Separator::Hyphen => '-',
        }
    }

    /// Parse a separator name ("underscore" or "hyphen").
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "underscore" | "_" => Ok(Separator::Underscore),
            "hyphen" | "-" => Ok(Separator::Hyphen),
            _ => Err(DpxError::Parse {
                message: format!("Unknown separator '{}'", s),
                help: Some("Valid separators: underscore, hyphen".to_string()),
            }),
        }
    }
}

/// How raw artwork names become output file names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizePolicy {
    pub separator: Separator,
    /// Drop characters that are neither alphanumeric, the separator,
    /// nor a dot.
    pub strip_punctuation: bool,
}

/// Derive a filesystem-friendly base name from `raw`.
///
/// Leading and trailing whitespace is trimmed, the rest is lowercased,
/// and each internal whitespace run becomes a single separator.
pub fn normalize(raw: &str, policy: NormalizePolicy) -> String {
    let sep = policy.separator.as_char();
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;

    for c in raw.trim().to_lowercase().chars() {
        if c.is_whitespace() {
            pending_sep = true;
            continue;
        }
        if policy.strip_punctuation && !(c.is_alphanumeric() || c == sep || c == '.') {
            continue;
        }
        if pending_sep {
            out.push(sep);
            pending_sep = false;
        }
        out.push(c);
    }

    out
}
