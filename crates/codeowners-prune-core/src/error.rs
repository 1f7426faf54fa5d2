//! Error types for manifest loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned when loading an ownership manifest.
#[derive(Debug, Error)]
pub enum Error {
    /// The manifest file does not exist.
    #[error("manifest file '{}' does not exist", .0.display())]
    ManifestNotFound(PathBuf),

    /// The manifest file exists but could not be read.
    #[error("failed to read manifest '{}': {source}", .path.display())]
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_not_found_message_names_the_path() {
        let error = Error::ManifestNotFound(PathBuf::from("missing/CODEOWNERS"));
        assert_eq!(
            error.to_string(),
            "manifest file 'missing/CODEOWNERS' does not exist"
        );
    }

    #[test]
    fn io_error_message_names_the_path() {
        let error = Error::Io {
            path: PathBuf::from("CODEOWNERS"),
            source: std::io::Error::other("boom"),
        };
        assert!(error.to_string().contains("CODEOWNERS"));
        assert!(error.to_string().contains("boom"));
    }
}
