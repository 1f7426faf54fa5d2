//! Stale-entry resolution against a filesystem tree.
//!
//! Patterns are checked for existence relative to a [`ResolutionRoot`]:
//! plain paths with a direct existence test, patterns containing a glob
//! metacharacter (`*`, `?`, `[`) by expanding the glob against the tree
//! and looking for at least one match.

use std::path::{Component, Path, PathBuf};

use globset::GlobBuilder;
use log::{debug, trace};
use walkdir::WalkDir;

use crate::manifest::Manifest;

/// Owner display text used when an entry carries no owner.
pub const NO_OWNER: &str = "<No owner specified>";

/// An absolute directory that manifest patterns are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRoot(PathBuf);

impl ResolutionRoot {
    /// Creates a resolution root, absolutizing `path` against the current
    /// working directory when it is relative.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(path),
                Err(_) => path.to_path_buf(),
            }
        };
        Self(normalize(&absolute))
    }

    /// Returns the root directory.
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Resolves a manifest pattern to the filesystem path it is checked at.
    ///
    /// A leading `/` anchors the pattern to the root (the slash is
    /// stripped); any other pattern joins the root directly. The result is
    /// lexically normalized, collapsing `.` and `..` segments.
    pub fn target_for(&self, pattern: &str) -> PathBuf {
        let relative = pattern.strip_prefix('/').unwrap_or(pattern);
        normalize(&self.0.join(relative))
    }

    /// Returns true when `pattern` resolves to at least one existing file
    /// or directory under this root.
    pub fn pattern_resolves(&self, pattern: &str) -> bool {
        let target = self.target_for(pattern);
        if has_glob_meta(pattern) {
            glob_matches_any(&target)
        } else {
            target.exists()
        }
    }
}

/// A manifest entry whose pattern no longer resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleEntry {
    /// 1-based line number of the entry in the manifest.
    pub line: usize,
    /// The pattern exactly as written.
    pub pattern: String,
    /// The owner text, if any was specified.
    pub owner: Option<String>,
    /// The verbatim line text (terminator stripped).
    pub text: String,
}

impl StaleEntry {
    /// Returns the owner text, or the no-owner sentinel for display.
    ///
    /// The sentinel is display-only and never parsed back as an owner.
    pub fn display_owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(NO_OWNER)
    }
}

/// Collects the entries of `manifest` whose patterns do not resolve under
/// `root`.
///
/// Entries are returned in file order, at most one per line. The result is
/// deterministic for an unchanged manifest and filesystem.
pub fn find_stale_entries(manifest: &Manifest, root: &ResolutionRoot) -> Vec<StaleEntry> {
    debug!(
        "checking {} line(s) against {}",
        manifest.lines.len(),
        root.path().display()
    );
    let mut stale = Vec::new();

    for line in manifest.entries() {
        let Some((pattern, owner)) = line.as_entry() else {
            continue;
        };

        if root.pattern_resolves(pattern) {
            trace!("line {}: '{}' resolves", line.number, pattern);
            continue;
        }

        debug!("line {}: '{}' does not resolve", line.number, pattern);
        stale.push(StaleEntry {
            line: line.number,
            pattern: pattern.to_owned(),
            owner: owner.map(str::to_owned),
            text: line.raw.clone(),
        });
    }

    debug!("found {} stale entries", stale.len());
    stale
}

/// Returns true if `pattern` contains a glob metacharacter.
pub fn has_glob_meta(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Lexically collapses `.` and `..` segments without touching the
/// filesystem. Excess `..` at the root is dropped.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Expands a glob target and reports whether anything matches.
///
/// The walk starts at the deepest ancestor containing no metacharacter and
/// stops at the first matching entry. Unreadable directories are skipped,
/// so a permission failure counts as "no match".
fn glob_matches_any(target: &Path) -> bool {
    let pattern = target.to_string_lossy();

    // Use literal_separator so * doesn't cross directory boundaries
    let glob = match GlobBuilder::new(&pattern).literal_separator(true).build() {
        Ok(glob) => glob,
        Err(err) => {
            debug!("invalid glob '{}': {}", pattern, err);
            return false;
        }
    };
    let matcher = glob.compile_matcher();

    let base = literal_base(target);
    trace!("expanding glob '{}' from {}", pattern, base.display());

    for entry in WalkDir::new(&base)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if matcher.is_match(entry.path()) {
            trace!("glob '{}' matched {}", pattern, entry.path().display());
            return true;
        }
    }

    false
}

/// Returns the deepest ancestor of `target` containing no glob
/// metacharacter.
fn literal_base(target: &Path) -> PathBuf {
    let mut base = PathBuf::new();
    for component in target.components() {
        if let Component::Normal(part) = component
            && has_glob_meta(&part.to_string_lossy())
        {
            break;
        }
        base.push(component.as_os_str());
    }
    base
}
