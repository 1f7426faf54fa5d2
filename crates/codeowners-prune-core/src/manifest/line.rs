//! Line data structures for ownership manifests.

use std::fmt::{self, Display};

/// The classified content of a manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A blank line (may contain only whitespace).
    Blank,
    /// A comment line (first non-whitespace byte is `#`).
    Comment,
    /// An ownership entry.
    Entry {
        /// The file path pattern (first whitespace-delimited token).
        pattern: String,
        /// Everything after the first run of whitespace, if present.
        owner: Option<String>,
    },
}

/// A single line of an ownership manifest.
///
/// The raw text is preserved verbatim (line terminator stripped) so that
/// reports and patches can reproduce the source exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLine {
    /// The verbatim line text, terminator stripped.
    pub raw: String,
    /// 1-based line number.
    pub number: usize,
    /// The classified content of this line.
    pub kind: LineKind,
}

impl ManifestLine {
    /// Creates a new line with the given raw text, number, and kind.
    pub fn new(raw: impl Into<String>, number: usize, kind: LineKind) -> Self {
        Self {
            raw: raw.into(),
            number,
            kind,
        }
    }

    /// Creates a blank line.
    pub fn blank(raw: impl Into<String>, number: usize) -> Self {
        Self::new(raw, number, LineKind::Blank)
    }

    /// Creates a comment line.
    pub fn comment(raw: impl Into<String>, number: usize) -> Self {
        Self::new(raw, number, LineKind::Comment)
    }

    /// Creates an entry line.
    pub fn entry(
        raw: impl Into<String>,
        number: usize,
        pattern: impl Into<String>,
        owner: Option<String>,
    ) -> Self {
        Self::new(
            raw,
            number,
            LineKind::Entry {
                pattern: pattern.into(),
                owner,
            },
        )
    }

    /// Returns true if this is an entry line.
    pub fn is_entry(&self) -> bool {
        matches!(self.kind, LineKind::Entry { .. })
    }

    /// Returns true if this is a comment line.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment)
    }

    /// Returns true if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Returns the pattern and owner when this line is an entry.
    pub fn as_entry(&self) -> Option<(&str, Option<&str>)> {
        match &self.kind {
            LineKind::Entry { pattern, owner } => Some((pattern, owner.as_deref())),
            _ => None,
        }
    }
}

impl Display for ManifestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
