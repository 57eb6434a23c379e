//! Changelog document model.
//!
//! A changelog is split around its first version line: everything above it is
//! the header, the version line and everything below it is the body. When the
//! document is rendered again the bumped version and the new comment are
//! inserted between the two, so the previous version line stays in the file as
//! history.
//!
//! Lines are kept as raw bytes; only the version line needs to be understood,
//! so a changelog in any ASCII-compatible encoding passes through unchanged.

use std::path::Path;

use crate::domain::ChangelogVersion;
use crate::error::{BumpError, Result};

/// A parsed changelog ready to receive a new version entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Changelog {
    pub header: Vec<Vec<u8>>,
    pub version: ChangelogVersion,
    pub comment: String,
    pub body: Vec<Vec<u8>>,
}

impl Changelog {
    /// Parse a changelog, failing when no line carries a version.
    ///
    /// `path` is only used to describe the failure.
    pub fn parse(content: &[u8], path: &Path) -> Result<Self> {
        let changelog = Self::parse_lenient(content);
        if changelog.body.is_empty() {
            return Err(BumpError::NoVersionLine {
                path: path.to_path_buf(),
            });
        }
        Ok(changelog)
    }

    /// Parse a changelog without requiring a version line.
    ///
    /// A document with no version line becomes all header, with the version
    /// left at `0.0.0`.
    pub fn parse_lenient(content: &[u8]) -> Self {
        let mut changelog = Changelog::default();
        let mut finding_version = true;

        // Split on '\n' only: a trailing '\r' stays part of the line.
        for line in content.split(|&b| b == b'\n') {
            if finding_version {
                if let Some(version) = ChangelogVersion::parse_line(line) {
                    changelog.version = version;
                    finding_version = false;
                    changelog.body.push(line.to_vec());
                } else {
                    changelog.header.push(line.to_vec());
                }
            } else {
                changelog.body.push(line.to_vec());
            }
        }

        changelog
    }

    /// Whether a version line was found while parsing
    pub fn has_version_line(&self) -> bool {
        !self.body.is_empty()
    }

    /// Flatten the document: header, new version line, comment, then body.
    pub fn lines(&self) -> Vec<Vec<u8>> {
        let mut lines = Vec::with_capacity(self.header.len() + self.body.len() + 2);
        lines.extend(self.header.iter().cloned());
        lines.push(self.version.with_prefix());
        lines.push(self.comment.as_bytes().to_vec());
        lines.extend(self.body.iter().cloned());
        lines
    }

    /// Render the document back to bytes.
    ///
    /// Lines are joined with `'\n'`, so a comment containing newlines spans
    /// several lines of output.
    pub fn render(&self) -> Vec<u8> {
        self.lines().join(&b'\n')
    }
}
