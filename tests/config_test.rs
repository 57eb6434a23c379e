// tests/config_test.rs
use std::fs;
use std::io::Write;

use changelog_bump::config::{load_config, Config, LOCAL_CONFIG_FILE};
use changelog_bump::BumpError;
use serial_test::serial;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[changelog]
require_version_line = false

[version_file]
pattern = "gems/*/lib/version.rb"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert!(!config.changelog.require_version_line);
    assert_eq!(config.version_file.pattern, "gems/*/lib/version.rb");
    assert!(config.version_file.require_assignment);
}

#[test]
#[serial]
fn test_load_fixture() {
    let config =
        load_config(Some("tests/fixtures/lenient.toml")).expect("Failed to load test config");
    assert!(!config.changelog.require_version_line);
    assert!(!config.version_file.require_assignment);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("tests/fixtures/does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, BumpError::Config(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[version_file\npattern = 1").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
#[serial]
fn test_local_file_is_picked_up_from_working_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(LOCAL_CONFIG_FILE),
        "[version_file]\nrequire_assignment = false\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert!(!config.unwrap().version_file.require_assignment);
}

#[test]
#[serial]
fn test_defaults_without_local_file() {
    let dir = TempDir::new().unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    // A user-level file may exist on the machine running the tests, so only
    // check that loading succeeds and the pattern is usable.
    let config = config.unwrap();
    assert!(!config.version_file.pattern.is_empty());
    assert_eq!(Config::default().version_file.pattern, "lib/*/version.rb");
}
