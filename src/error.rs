use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for changelog-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Option error: {0}")]
    Options(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read changelog '{}': {source}", .path.display())]
    ReadChangelog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No version line found in changelog '{}'", .path.display())]
    NoVersionLine { path: PathBuf },

    #[error("Failed to write changelog '{}': {source}", .path.display())]
    WriteChangelog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Found multiple version files: {}", join_paths(.0))]
    AmbiguousVersionFile(Vec<PathBuf>),

    #[error("Invalid version file pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read version file '{}': {source}", .path.display())]
    ReadVersionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No VERSION assignment found in '{}'", .path.display())]
    NoVersionAssignment { path: PathBuf },

    #[error("Failed to write version file '{}': {source}", .path.display())]
    WriteVersionFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Process exit codes, one per stage of a run
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const OPTIONS: i32 = 1;
    pub const READ_CHANGELOG: i32 = 2;
    pub const WRITE_CHANGELOG: i32 = 3;
    pub const VERSION_FILE: i32 = 4;
    pub const WRITE_VERSION_FILE: i32 = 5;
}

/// Convenience type alias for Results in changelog-bump
pub type Result<T> = std::result::Result<T, BumpError>;

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl BumpError {
    /// Create an option validation error
    pub fn options(msg: impl Into<String>) -> Self {
        BumpError::Options(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Process exit code for this failure class.
    ///
    /// Each stage of a run fails with its own code so scripts can tell a bad
    /// invocation apart from a failed write.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::Options(_) | BumpError::Config(_) => exit_code::OPTIONS,
            BumpError::ReadChangelog { .. } | BumpError::NoVersionLine { .. } => {
                exit_code::READ_CHANGELOG
            }
            BumpError::WriteChangelog { .. } => exit_code::WRITE_CHANGELOG,
            BumpError::AmbiguousVersionFile(_)
            | BumpError::Pattern { .. }
            | BumpError::ReadVersionFile { .. }
            | BumpError::NoVersionAssignment { .. } => exit_code::VERSION_FILE,
            BumpError::WriteVersionFile { .. } => exit_code::WRITE_VERSION_FILE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_err() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "file not found")
    }

    #[test]
    fn test_error_display() {
        let err = BumpError::options("filename is required");
        assert_eq!(err.to_string(), "Option error: filename is required");
    }

    #[test]
    fn test_ambiguous_lists_all_candidates() {
        let err = BumpError::AmbiguousVersionFile(vec![
            PathBuf::from("lib/a/version.rb"),
            PathBuf::from("lib/b/version.rb"),
        ]);
        assert_eq!(
            err.to_string(),
            "Found multiple version files: lib/a/version.rb, lib/b/version.rb"
        );
    }

    #[test]
    fn test_io_errors_carry_cause() {
        let err = BumpError::ReadChangelog {
            path: PathBuf::from("CHANGELOG.md"),
            source: io_err(),
        };
        let msg = err.to_string();
        assert!(msg.contains("CHANGELOG.md"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_exit_codes_are_distinct_per_stage() {
        let codes = vec![
            BumpError::options("x").exit_code(),
            BumpError::ReadChangelog {
                path: PathBuf::new(),
                source: io_err(),
            }
            .exit_code(),
            BumpError::WriteChangelog {
                path: PathBuf::new(),
                source: io_err(),
            }
            .exit_code(),
            BumpError::AmbiguousVersionFile(vec![]).exit_code(),
            BumpError::WriteVersionFile {
                path: PathBuf::new(),
                source: io_err(),
            }
            .exit_code(),
        ];
        assert_eq!(codes, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_exit_codes_group_by_stage() {
        assert_eq!(BumpError::config("bad toml").exit_code(), 1);
        assert_eq!(
            BumpError::NoVersionLine {
                path: PathBuf::new()
            }
            .exit_code(),
            2
        );
        assert_eq!(
            BumpError::NoVersionAssignment {
                path: PathBuf::new()
            }
            .exit_code(),
            4
        );
    }
}
