//! User interface module - terminal output for a bump run.
//!
//! All styling goes through `console`, which drops colours when the output
//! stream is not a terminal.

pub mod formatter;

pub use formatter::{
    display_bump_warning, display_dry_run, display_error, display_status, display_success,
    display_version_change, display_warning,
};
