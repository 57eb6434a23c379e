//! Formatting functions for terminal output.
//!
//! The `format_*` functions build the plain text and are tested directly; the
//! `display_*` functions add styling and print.

use console::style;

use crate::warning::BumpWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a non-fatal warning on stderr.
pub fn display_warning(warning: &BumpWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Text describing a version change for one file.
pub fn format_version_change(file: &str, old: &str, new: &str) -> String {
    format!("{}: {} -> {}", file, old, new)
}

/// Display the version change applied to a file.
///
/// # Arguments
/// * `file` - Path of the file that was (or would be) rewritten
/// * `old` - Version before the bump
/// * `new` - Version after the bump
pub fn display_version_change(file: &str, old: &str, new: &str) {
    display_success(&format_version_change(
        file,
        &style(old).red().to_string(),
        &style(new).green().to_string(),
    ));
}

/// Display a warning, or a plain status line for conditions that only mean
/// an optional step had nothing to do.
pub fn display_bump_warning(warning: &BumpWarning) {
    if warning.is_informational() {
        display_status(&warning.to_string());
    } else {
        display_warning(warning);
    }
}

/// Text shown for a file that would be written in dry-run mode.
///
/// Bytes that are not UTF-8 are shown as replacement characters.
pub fn format_dry_run(file: &str, contents: &[u8]) -> String {
    let contents = String::from_utf8_lossy(contents);
    let mut out = format!("--- {} (dry run)\n", file);
    for line in contents.split('\n') {
        out.push_str("  ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Print the contents that would be written to `file`.
pub fn display_dry_run(file: &str, contents: &[u8]) {
    print!("{}", format_dry_run(file, contents));
}
