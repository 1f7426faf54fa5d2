//! Deletion-only unified diffs for stale manifest entries.
//!
//! The generated patch spans the whole file as a single hunk: stale lines
//! become deletions, every other line is emitted as unchanged context, so
//! applying the patch removes exactly the stale entries.

use std::collections::BTreeSet;
use std::env;
use std::fmt::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::manifest::{Manifest, ManifestLine};
use crate::resolve::StaleEntry;

/// Generates the stale-removal patch for `manifest`.
///
/// Equivalent to [`render_patch`] with the display path computed by
/// [`display_path`].
pub fn generate_patch(manifest: &Manifest, stale: &[StaleEntry]) -> String {
    render_patch(&display_path(&manifest.path), &manifest.lines, stale)
}

/// Renders a unified diff that deletes the stale lines.
///
/// The diff holds a single hunk covering the whole file:
/// `@@ -1,N +1,N-k @@` where `k` is the number of stale lines. Stale lines
/// get a `-` prefix, every other line a single leading space. The output
/// always ends with a newline.
pub fn render_patch(display_path: &str, lines: &[ManifestLine], stale: &[StaleEntry]) -> String {
    let stale_lines: BTreeSet<usize> = stale.iter().map(|entry| entry.line).collect();
    let original = lines.len();
    let remaining = original - stale_lines.len();

    let mut patch = String::new();
    let _ = writeln!(patch, "--- a/{}", display_path);
    let _ = writeln!(patch, "+++ b/{}", display_path);
    let _ = writeln!(patch, "@@ -1,{} +1,{} @@", original, remaining);

    for line in lines {
        if stale_lines.contains(&line.number) {
            let _ = writeln!(patch, "-{}", line.raw);
        } else {
            let _ = writeln!(patch, " {}", line.raw);
        }
    }

    patch
}

/// Computes the path written into the patch header for `manifest_path`.
///
/// Preference order: the path relative to the enclosing git repository
/// root; the path relative to the current working directory; the bare file
/// name when that relative path is absolute or escapes the working tree.
pub fn display_path(manifest_path: &Path) -> String {
    if let Some(toplevel) = git_toplevel(&parent_dir(manifest_path))
        && let Ok(canonical) = manifest_path.canonicalize()
        && let Ok(relative) = canonical.strip_prefix(&toplevel)
    {
        return path_to_display(relative);
    }

    let relative = if manifest_path.is_absolute() {
        env::current_dir()
            .ok()
            .and_then(|cwd| manifest_path.strip_prefix(&cwd).ok().map(Path::to_path_buf))
    } else {
        Some(manifest_path.to_path_buf())
    };

    match relative {
        Some(path) if !path.starts_with("..") => path_to_display(&path),
        _ => manifest_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| manifest_path.to_string_lossy().into_owned()),
    }
}

/// Returns the directory the git lookup runs in for `path`.
fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Asks git for the repository toplevel containing `dir`.
///
/// Returns `None` when git is unavailable, the directory is not inside a
/// work tree, or the output is not valid UTF-8. Failures here are never
/// fatal; the caller falls back to a path-based display.
fn git_toplevel(dir: &Path) -> Option<PathBuf> {
    let output = Command::new("git")
        .current_dir(dir)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .ok()?;

    if !output.status.success() {
        debug!(
            "git rev-parse --show-toplevel failed in {}",
            dir.display()
        );
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let toplevel = PathBuf::from(stdout.trim_end());
    toplevel.canonicalize().ok()
}

/// Renders a path with forward slashes.
fn path_to_display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
