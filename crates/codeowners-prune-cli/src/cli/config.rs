//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration
//! types and maps run outcomes to process exit codes.

use std::path::PathBuf;

use thiserror::Error;

use codeowners_prune_core::ResolutionRoot;

use crate::cli::Args;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The run completed, whether or not stale entries were found.
    Success = 0,
    /// Startup or I/O failure (missing manifest, bad root, write error).
    StartupFailure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Validated and processed configuration for a run.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the CODEOWNERS file.
    pub codeowners_path: PathBuf,
    /// Root directory patterns are resolved against.
    pub root: ResolutionRoot,
    /// Whether to write a patch instead of printing a report.
    pub patch: bool,
    /// Where the patch is written.
    pub patch_output: PathBuf,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let root_path = args.project_root.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "project root '{}' is invalid: {}",
                args.project_root.display(),
                e
            ))
        })?;

        Ok(Self {
            codeowners_path: args.codeowners_path.clone(),
            root: ResolutionRoot::new(root_path),
            patch: args.patch,
            patch_output: args.patch_output.clone(),
            json_output: args.json,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn exit_codes_convert_to_process_status() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
    }

    #[test]
    fn from_args_canonicalizes_the_root() {
        let dir = TempDir::new().unwrap();
        let args = Args::parse_from([
            "codeowners-prune",
            "CODEOWNERS",
            "--project-root",
            dir.path().to_str().unwrap(),
        ]);

        let config = ValidatedConfig::from_args(&args).unwrap();
        assert!(config.root.path().is_absolute());
        assert!(!config.patch);
        assert!(!config.json_output);
    }

    #[test]
    fn from_args_rejects_a_missing_root() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let args = Args::parse_from([
            "codeowners-prune",
            "CODEOWNERS",
            "--project-root",
            missing.to_str().unwrap(),
        ]);

        let error = ValidatedConfig::from_args(&args).unwrap_err();
        assert!(error.to_string().contains("invalid"));
    }
}
