use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumpError, Result};
use crate::version_file::DEFAULT_VERSION_FILE_PATTERN;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "changelog-bump.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".changelog-bump.toml";

/// Represents the complete configuration for changelog-bump.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub changelog: ChangelogConfig,

    #[serde(default)]
    pub version_file: VersionFileConfig,
}

fn default_true() -> bool {
    true
}

fn default_version_file_pattern() -> String {
    DEFAULT_VERSION_FILE_PATTERN.to_string()
}

/// Changelog parsing behaviour.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogConfig {
    /// Fail when the changelog contains no version line. When disabled the
    /// whole document is treated as header and the version starts at 0.0.0.
    #[serde(default = "default_true")]
    pub require_version_line: bool,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        ChangelogConfig {
            require_version_line: true,
        }
    }
}

/// Library version file behaviour.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionFileConfig {
    /// Glob locating the version file, relative to the working directory
    #[serde(default = "default_version_file_pattern")]
    pub pattern: String,

    /// Fail when the version file has no `VERSION = "x.y.z"` line
    #[serde(default = "default_true")]
    pub require_assignment: bool,
}

impl Default for VersionFileConfig {
    fn default() -> Self {
        VersionFileConfig {
            pattern: default_version_file_pattern(),
            require_assignment: true,
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `changelog-bump.toml` in current directory
/// 3. `.changelog-bump.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        return load_from(Path::new(path));
    }

    let local = Path::new(LOCAL_CONFIG_FILE);
    if local.exists() {
        return load_from(local);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join(USER_CONFIG_FILE);
        if user.exists() {
            return load_from(&user);
        }
    }

    Ok(Config::default())
}

fn load_from(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        BumpError::config(format!("cannot read '{}': {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| BumpError::config(format!("'{}': {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(config_str: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(config_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.changelog.require_version_line);
        assert!(config.version_file.require_assignment);
        assert_eq!(config.version_file.pattern, "lib/*/version.rb");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config = parse_config("[version_file]\nrequire_assignment = false\n").unwrap();
        assert!(!config.version_file.require_assignment);
        assert_eq!(config.version_file.pattern, "lib/*/version.rb");
        assert!(config.changelog.require_version_line);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(parse_config("[changelog\n").is_err());
        assert!(parse_config("[changelog]\nrequire_version_line = \"yes\"\n").is_err());
    }
}
