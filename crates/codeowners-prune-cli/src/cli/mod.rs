//! CLI module for the CODEOWNERS pruner.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Stale CODEOWNERS entry checker.
///
/// Validates that every file or pattern listed in a CODEOWNERS file still
/// resolves to something in the project tree, and optionally writes a
/// patch that removes the entries that no longer do.
#[derive(Parser, Debug)]
#[command(name = "codeowners-prune")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the CODEOWNERS file.
    pub codeowners_path: PathBuf,

    /// Path to the project root directory patterns are resolved against.
    #[arg(long, env = "PROJECT_ROOT", default_value = ".")]
    pub project_root: PathBuf,

    /// Write a patch removing the stale entries instead of printing a report.
    #[arg(long)]
    pub patch: bool,

    /// Path the stale-removal patch is written to.
    #[arg(long, default_value = "remove-stale-entries.patch")]
    pub patch_output: PathBuf,

    /// Output the stale entries as JSON instead of a table.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_path_is_required() {
        assert!(Args::try_parse_from(["codeowners-prune"]).is_err());
    }

    #[test]
    fn test_positional_manifest_path() {
        let args = Args::parse_from(["codeowners-prune", ".github/CODEOWNERS"]);
        assert_eq!(args.codeowners_path, PathBuf::from(".github/CODEOWNERS"));
    }

    #[test]
    fn test_default_project_root() {
        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS"]);
        assert_eq!(args.project_root, PathBuf::from("."));
    }

    #[test]
    fn test_explicit_project_root() {
        let args = Args::parse_from([
            "codeowners-prune",
            "CODEOWNERS",
            "--project-root",
            "/srv/repo",
        ]);
        assert_eq!(args.project_root, PathBuf::from("/srv/repo"));
    }

    #[test]
    fn test_patch_mode_flag() {
        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS"]);
        assert!(!args.patch);

        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS", "--patch"]);
        assert!(args.patch);
    }

    #[test]
    fn test_default_patch_output() {
        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS"]);
        assert_eq!(
            args.patch_output,
            PathBuf::from("remove-stale-entries.patch")
        );
    }

    #[test]
    fn test_patch_output_override() {
        let args = Args::parse_from([
            "codeowners-prune",
            "CODEOWNERS",
            "--patch",
            "--patch-output",
            "stale.patch",
        ]);
        assert_eq!(args.patch_output, PathBuf::from("stale.patch"));
    }

    #[test]
    fn test_json_output_flag() {
        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS", "--json"]);
        assert!(args.json);

        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS", "-j"]);
        assert!(args.json);
    }

    #[test]
    fn test_verbose_flag() {
        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS"]);
        assert_eq!(args.verbose, 0);

        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS", "-v"]);
        assert_eq!(args.verbose, 1);

        let args = Args::parse_from(["codeowners-prune", "CODEOWNERS", "-vv"]);
        assert_eq!(args.verbose, 2);
    }
}
