//! Line and file-level parsing for ownership manifests.
//!
//! Classification trims surrounding whitespace only to decide what a line
//! is; the raw text of every line is preserved verbatim.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::lexer::{is_blank_line, parse_comment_line, parse_entry_components};
use super::line::ManifestLine;
use crate::error::Error;

/// A parsed ownership manifest: its path plus every line in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// The path the manifest was loaded from.
    pub path: PathBuf,
    /// All lines, in order, with 1-based numbering.
    pub lines: Vec<ManifestLine>,
}

impl Manifest {
    /// Loads and parses the manifest at `path`.
    ///
    /// Fails with [`Error::ManifestNotFound`] when the file is absent.
    pub fn load(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            lines: parse_manifest(&content),
        })
    }

    /// Creates a manifest from already-parsed lines.
    pub fn new(path: impl Into<PathBuf>, lines: Vec<ManifestLine>) -> Self {
        Self {
            path: path.into(),
            lines,
        }
    }

    /// Returns an iterator over all entry lines.
    pub fn entries(&self) -> impl Iterator<Item = &ManifestLine> {
        self.lines.iter().filter(|line| line.is_entry())
    }
}

/// Parses manifest content into classified lines.
pub fn parse_manifest(input: &str) -> Vec<ManifestLine> {
    debug!("parsing manifest ({} bytes)", input.len());
    let mut lines = Vec::new();

    for (idx, raw) in input.lines().enumerate() {
        let number = idx + 1; // 1-based line numbers
        let line = classify_line(raw, number);
        trace!("line {}: {:?}", number, line.kind);
        lines.push(line);
    }

    debug!("parsed {} line(s)", lines.len());
    lines
}

/// Classifies a single line, preserving its raw text.
fn classify_line(raw: &str, number: usize) -> ManifestLine {
    if is_blank_line(raw) {
        return ManifestLine::blank(raw, number);
    }

    if parse_comment_line(raw).is_ok() {
        return ManifestLine::comment(raw, number);
    }

    match parse_entry_components(raw) {
        Ok((_, components)) => ManifestLine::entry(
            raw,
            number,
            components.pattern,
            components.owner.map(str::to_owned),
        ),
        // Unreachable for non-blank input; classify as blank rather than panic.
        Err(_) => ManifestLine::blank(raw, number),
    }
}
