//! Ruby library version file support.
//!
//! Gems conventionally declare their version in `lib/<name>/version.rb`:
//!
//! ```ruby
//! module Example
//!   VERSION = '1.2.3'.freeze
//! end
//! ```
//!
//! This module finds that file and rewrites the version it declares.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::domain::version::capture_number;
use crate::domain::ChangelogVersion;
use crate::error::{BumpError, Result};

/// Default location of the version file, relative to the project root
pub const DEFAULT_VERSION_FILE_PATTERN: &str = "lib/*/version.rb";

// ASCII-only matching: `\s` and digits never match multi-byte characters.
static VERSION_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?-u)(?P<prefix>\s*VERSION\s*=\s*['"])(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?P<suffix>['"])(?P<freeze>\.freeze)?"#,
    )
    .expect("version assignment pattern is valid")
});

/// A `VERSION = "x.y.z"` assignment matched on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFileMatch {
    /// Indentation, constant name, operator and opening quote
    pub prefix: Vec<u8>,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Closing quote
    pub suffix: Vec<u8>,
    /// Trailing `.freeze`, if present
    pub freeze: Option<Vec<u8>>,
}

impl VersionFileMatch {
    /// Match a version assignment on one line
    pub fn parse_line(line: &[u8]) -> Option<Self> {
        let captures = VERSION_ASSIGNMENT.captures(line)?;
        Some(VersionFileMatch {
            prefix: captures["prefix"].to_vec(),
            major: capture_number(&captures, "major")?,
            minor: capture_number(&captures, "minor")?,
            patch: capture_number(&captures, "patch")?,
            suffix: captures["suffix"].to_vec(),
            freeze: captures.name("freeze").map(|m| m.as_bytes().to_vec()),
        })
    }

    /// The version currently declared, without quotes
    pub fn current(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Rebuild the assignment with a new version, keeping quotes and freeze marker
    pub fn render(&self, version: &ChangelogVersion) -> Vec<u8> {
        let mut line = self.prefix.clone();
        line.extend_from_slice(version.to_string().as_bytes());
        line.extend_from_slice(&self.suffix);
        if let Some(freeze) = &self.freeze {
            line.extend_from_slice(freeze);
        }
        line
    }
}

/// Result of rewriting a version file in memory
#[derive(Debug, Clone)]
pub struct PatchedVersionFile {
    pub path: PathBuf,
    pub contents: Vec<u8>,
    pub permissions: fs::Permissions,
    /// Version declared before patching; `None` when no assignment matched
    pub previous: Option<String>,
}

/// Find the single version file matching `pattern` under `root`.
///
/// Returns `Ok(None)` when nothing matches and an error listing every
/// candidate when more than one file matches.
pub fn locate(root: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    // The root is literal text; only `pattern` may carry wildcards.
    let root = glob::Pattern::escape(&root.to_string_lossy());
    let full_pattern = Path::new(&root).join(pattern);
    let full_pattern = full_pattern.to_string_lossy();

    let entries = glob::glob(&full_pattern).map_err(|source| BumpError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    // Unreadable directories are skipped, as a shell glob would.
    let mut candidates: Vec<PathBuf> = entries.filter_map(|entry| entry.ok()).collect();

    match candidates.len() {
        0 => Ok(None),
        1 => Ok(candidates.pop()),
        _ => Err(BumpError::AmbiguousVersionFile(candidates)),
    }
}

/// Rewrite the first version assignment in `contents`.
///
/// Returns the new contents and the previously declared version, or `None`
/// when no line matched (the contents are then returned unchanged). Text after
/// the assignment on the matched line is not kept.
pub fn patch_contents(
    contents: &[u8],
    version: &ChangelogVersion,
) -> (Vec<u8>, Option<String>) {
    let mut lines: Vec<Vec<u8>> = contents
        .split(|&b| b == b'\n')
        .map(<[u8]>::to_vec)
        .collect();
    let mut previous = None;

    for line in lines.iter_mut() {
        if let Some(assignment) = VersionFileMatch::parse_line(line) {
            previous = Some(assignment.current());
            *line = assignment.render(version);
            break;
        }
    }

    (lines.join(&b'\n'), previous)
}

/// Read and patch the version file at `path`.
///
/// Permissions are read before the contents so they can be restored on write.
/// With `require_assignment` set, a file without a version assignment is an
/// error; otherwise it comes back unchanged with `previous` set to `None`.
pub fn patch_file(
    path: &Path,
    version: &ChangelogVersion,
    require_assignment: bool,
) -> Result<PatchedVersionFile> {
    let read_error = |source| BumpError::ReadVersionFile {
        path: path.to_path_buf(),
        source,
    };

    let permissions = fs::metadata(path).map_err(read_error)?.permissions();
    let original = fs::read(path).map_err(read_error)?;

    let (contents, previous) = patch_contents(&original, version);
    if previous.is_none() && require_assignment {
        return Err(BumpError::NoVersionAssignment {
            path: path.to_path_buf(),
        });
    }

    Ok(PatchedVersionFile {
        path: path.to_path_buf(),
        contents,
        permissions,
        previous,
    })
}

/// Truncate and rewrite the version file, then restore its permissions.
///
/// The write is not atomic: a crash part way through can leave a partial file.
pub fn write_preserving_permissions(patched: &PatchedVersionFile) -> Result<()> {
    let write_error = |source| BumpError::WriteVersionFile {
        path: patched.path.clone(),
        source,
    };

    fs::write(&patched.path, &patched.contents).map_err(write_error)?;
    fs::set_permissions(&patched.path, patched.permissions.clone()).map_err(write_error)?;
    Ok(())
}
