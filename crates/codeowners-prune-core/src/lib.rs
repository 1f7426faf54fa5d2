//! CODEOWNERS Prune Core
//!
//! A library for validating CODEOWNERS-style ownership manifests against a
//! filesystem tree and generating patches that remove the stale entries.
//!
//! # Features
//!
//! - **Parser**: classify manifest lines while preserving the raw text
//! - **Resolution**: path and glob existence checks against a project root
//! - **Patch**: deletion-only unified diffs that drop stale lines
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use codeowners_prune_core::{find_stale_entries, Manifest, ResolutionRoot};
//!
//! let manifest = Manifest::load(Path::new("CODEOWNERS"))?;
//! let root = ResolutionRoot::new(".");
//!
//! for entry in find_stale_entries(&manifest, &root) {
//!     println!(
//!         "line {}: {} ({})",
//!         entry.line,
//!         entry.pattern,
//!         entry.display_owner()
//!     );
//! }
//! # Ok::<(), codeowners_prune_core::Error>(())
//! ```
//!
//! # Pattern semantics
//!
//! A pattern starting with `/` is anchored to the resolution root; any
//! other pattern is joined to the root directly. Patterns containing a
//! glob metacharacter (`*`, `?`, `[`) are expanded against the tree and
//! count as existing when at least one entry matches. Bare relative
//! patterns are deliberately not matched at arbitrary directory depth the
//! way some CODEOWNERS implementations do.
//!
//! # Modules
//!
//! - [`manifest`]: manifest parsing
//! - [`resolve`]: stale-entry resolution
//! - [`patch`]: unified-diff generation

pub mod manifest;
pub mod patch;
pub mod resolve;

mod error;

// Re-export commonly used types at the crate root
pub use error::Error;
pub use manifest::{LineKind, Manifest, ManifestLine, parse_manifest};
pub use patch::{display_path, generate_patch, render_patch};
pub use resolve::{NO_OWNER, ResolutionRoot, StaleEntry, find_stale_entries};
