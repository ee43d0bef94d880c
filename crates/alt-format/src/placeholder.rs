//! Placeholder span detection.
//!
//! A placeholder is anything shaped like a small format directive:
//!
//! - `{` followed by an optional `:`
//! - any run of characters other than `}` or a space
//! - a closing `}`
//!
//! That covers `{}`, `{0}`, `{name}`, `{:.2f}`, `{:>8}` and `{:^5}`. The
//! directive content is never interpreted: the scanner only reports where
//! the span sits so the renderer can cut it out.

use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{:?[^} ]*\}").expect("placeholder pattern is valid"));

/// Outcome of scanning a template for the next placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// A span starting at byte offset `start`, `len` bytes long.
    Found { start: usize, len: usize },
    /// The template holds no placeholder.
    NotFound,
}

impl Scan {
    /// Byte range covered by the span, if one was found.
    pub fn range(self) -> Option<std::ops::Range<usize>> {
        match self {
            Scan::Found { start, len } => Some(start..start + len),
            Scan::NotFound => None,
        }
    }
}

/// Locates the leftmost placeholder span in `template`.
pub fn find_placeholder(template: &str) -> Scan {
    match PLACEHOLDER.find(template) {
        Some(m) => Scan::Found {
            start: m.start(),
            len: m.len(),
        },
        None => Scan::NotFound,
    }
}

/// Counts the non-overlapping placeholder spans in `template`.
pub fn count_placeholders(template: &str) -> usize {
    PLACEHOLDER.find_iter(template).count()
}
