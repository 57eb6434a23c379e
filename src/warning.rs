use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions reported during a bump.
/// The run still succeeds, but the user should know a step did nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum BumpWarning {
    /// The changelog has no version line and lenient parsing started from 0.0.0
    NoVersionLine { path: PathBuf },
    /// No library version file matched the configured pattern
    NoVersionFile { pattern: String },
    /// The version file exists but declares no `VERSION` constant
    NoVersionAssignment { path: PathBuf },
}

impl BumpWarning {
    /// True for conditions that are expected in normal use, such as a project
    /// without a ruby lib version file.
    pub fn is_informational(&self) -> bool {
        matches!(self, BumpWarning::NoVersionFile { .. })
    }
}

impl fmt::Display for BumpWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpWarning::NoVersionLine { path } => write!(
                f,
                "No version line in '{}', starting from 0.0.0",
                path.display()
            ),
            BumpWarning::NoVersionFile { pattern } => {
                write!(f, "No ruby lib version file found matching '{}'", pattern)
            }
            BumpWarning::NoVersionAssignment { path } => write!(
                f,
                "No VERSION assignment in '{}', file left unchanged",
                path.display()
            ),
        }
    }
}
