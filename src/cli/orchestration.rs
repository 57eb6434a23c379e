//! Main bump workflow orchestration
//!
//! Reads the changelog, bumps its version, writes it back and then keeps the
//! ruby library version file in step. Kept free of clap so the workflow can be
//! driven programmatically and from tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::changelog::Changelog;
use crate::config::Config;
use crate::domain::{ChangelogVersion, VersionBump};
use crate::error::{BumpError, Result};
use crate::version_file;
use crate::warning::BumpWarning;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpArgs {
    /// Changelog to read and overwrite
    pub filename: PathBuf,

    /// Comment as given on the command line; `\n` escapes are decoded later
    pub comment: String,

    pub major: bool,
    pub minor: bool,
    pub patch: bool,

    /// Also update `lib/*/version.rb`
    pub ruby_lib: bool,

    /// Report what would change without writing
    pub dry_run: bool,

    /// Directory the changelog path and version file glob are resolved against
    pub working_dir: PathBuf,
}

impl Default for BumpArgs {
    fn default() -> Self {
        BumpArgs {
            filename: PathBuf::new(),
            comment: String::new(),
            major: false,
            minor: false,
            patch: false,
            ruby_lib: true,
            dry_run: false,
            working_dir: PathBuf::from("."),
        }
    }
}

impl BumpArgs {
    /// Check required options and return the selected bump type.
    pub fn validate(&self) -> Result<VersionBump> {
        if self.filename.as_os_str().is_empty() {
            return Err(BumpError::options("filename is required"));
        }
        if self.comment.is_empty() {
            return Err(BumpError::options("comment is required"));
        }

        match (self.major, self.minor, self.patch) {
            (true, false, false) => Ok(VersionBump::Major),
            (false, true, false) => Ok(VersionBump::Minor),
            (false, false, true) => Ok(VersionBump::Patch),
            _ => Err(BumpError::options(
                "exactly one of major, minor and patch must be selected",
            )),
        }
    }

    fn changelog_path(&self) -> PathBuf {
        self.working_dir.join(&self.filename)
    }
}

/// Convert literal `\n` sequences in a command line comment into newlines
pub fn decode_comment(raw: &str) -> String {
    raw.replace("\\n", "\n")
}

/// What happened to the library version file
#[derive(Debug, Clone, PartialEq)]
pub struct VersionFileOutcome {
    pub path: PathBuf,
    /// Version declared before the bump; `None` if no assignment was found
    pub previous: Option<String>,
    pub contents: Vec<u8>,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub changelog_path: PathBuf,
    pub previous: ChangelogVersion,
    pub version: ChangelogVersion,
    /// Rendered changelog, as written (or as it would be in dry-run mode)
    pub changelog: Vec<u8>,
    pub version_file: Option<VersionFileOutcome>,
    pub warnings: Vec<BumpWarning>,
    pub dry_run: bool,
}

/// Read, bump and render the changelog without touching the file system
/// beyond the read.
pub fn process_changelog(
    path: &Path,
    comment: &str,
    bump: VersionBump,
    config: &Config,
) -> Result<(Changelog, ChangelogVersion)> {
    let content = fs::read(path).map_err(|source| BumpError::ReadChangelog {
        path: path.to_path_buf(),
        source,
    })?;

    let mut changelog = if config.changelog.require_version_line {
        Changelog::parse(&content, path)?
    } else {
        Changelog::parse_lenient(&content)
    };

    let previous = changelog.version.clone();
    changelog.version.bump(bump);
    changelog.comment = decode_comment(comment);
    Ok((changelog, previous))
}

/// Main bump workflow
///
/// 1. Validate options
/// 2. Parse the changelog and bump its version
/// 3. Write the changelog
/// 4. Locate, patch and write the ruby lib version file, if enabled
///
/// Every failure stops the run; a changelog that was already written is not
/// rolled back.
pub fn run_bump(args: &BumpArgs, config: &Config) -> Result<BumpOutcome> {
    let bump = args.validate()?;
    let changelog_path = args.changelog_path();

    let (changelog, previous) = process_changelog(&changelog_path, &args.comment, bump, config)?;

    let mut warnings = Vec::new();
    if !changelog.has_version_line() {
        warnings.push(BumpWarning::NoVersionLine {
            path: args.filename.clone(),
        });
    }

    let rendered = changelog.render();
    if !args.dry_run {
        fs::write(&changelog_path, &rendered).map_err(|source| BumpError::WriteChangelog {
            path: changelog_path.clone(),
            source,
        })?;
    }

    let mut outcome = BumpOutcome {
        changelog_path,
        previous,
        version: changelog.version,
        changelog: rendered,
        version_file: None,
        warnings,
        dry_run: args.dry_run,
    };

    if args.ruby_lib {
        update_version_file(args, config, &mut outcome)?;
    }

    Ok(outcome)
}

fn update_version_file(args: &BumpArgs, config: &Config, outcome: &mut BumpOutcome) -> Result<()> {
    let pattern = &config.version_file.pattern;
    let Some(path) = version_file::locate(&args.working_dir, pattern)? else {
        outcome.warnings.push(BumpWarning::NoVersionFile {
            pattern: pattern.clone(),
        });
        return Ok(());
    };

    let patched = version_file::patch_file(
        &path,
        &outcome.version,
        config.version_file.require_assignment,
    )?;

    if patched.previous.is_none() {
        outcome.warnings.push(BumpWarning::NoVersionAssignment {
            path: patched.path.clone(),
        });
    } else if !args.dry_run {
        version_file::write_preserving_permissions(&patched)?;
    }

    outcome.version_file = Some(VersionFileOutcome {
        path: patched.path,
        previous: patched.previous,
        contents: patched.contents,
    });
    Ok(())
}
