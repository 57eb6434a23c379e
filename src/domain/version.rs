use std::fmt;
use std::sync::LazyLock;

use regex::bytes::{Captures, Regex};

/// Matches the last `major.minor.patch` triple on a line; everything before it
/// is the prefix. Unicode mode is off so `.` accepts any byte and only ASCII
/// digits count as version components.
static VERSION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)(?P<prefix>.*)(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)")
        .expect("version line pattern is valid")
});

/// Parse an ASCII digit capture, rejecting values that overflow `u32`.
pub(crate) fn capture_number(captures: &Captures<'_>, name: &str) -> Option<u32> {
    std::str::from_utf8(captures.name(name)?.as_bytes())
        .ok()?
        .parse()
        .ok()
}

/// Version found on a changelog line, together with the bytes that preceded it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogVersion {
    /// Raw text before the version, kept byte for byte
    pub prefix: Vec<u8>,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ChangelogVersion {
    /// Create a version with the given prefix
    pub fn new(prefix: impl Into<Vec<u8>>, major: u32, minor: u32, patch: u32) -> Self {
        ChangelogVersion {
            prefix: prefix.into(),
            major,
            minor,
            patch,
        }
    }

    /// Parse the version from a changelog line.
    ///
    /// Returns `None` when the line has no dotted triple, or when a component
    /// does not fit in a `u32`.
    pub fn parse_line(line: &[u8]) -> Option<Self> {
        let captures = VERSION_LINE.captures(line)?;
        Some(ChangelogVersion {
            prefix: captures["prefix"].to_vec(),
            major: capture_number(&captures, "major")?,
            minor: capture_number(&captures, "minor")?,
            patch: capture_number(&captures, "patch")?,
        })
    }

    pub fn increment_major(&mut self) {
        self.major += 1;
        self.minor = 0;
        self.patch = 0;
    }

    pub fn increment_minor(&mut self) {
        self.minor += 1;
        self.patch = 0;
    }

    pub fn increment_patch(&mut self) {
        self.patch += 1;
    }

    /// Apply exactly one increment according to the bump type
    pub fn bump(&mut self, bump_type: VersionBump) {
        match bump_type {
            VersionBump::Major => self.increment_major(),
            VersionBump::Minor => self.increment_minor(),
            VersionBump::Patch => self.increment_patch(),
        }
    }

    /// Render the version with its original prefix, e.g. `## v1.3.0`
    pub fn with_prefix(&self) -> Vec<u8> {
        let mut line = self.prefix.clone();
        line.extend_from_slice(self.to_string().as_bytes());
        line
    }
}

impl fmt::Display for ChangelogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}
