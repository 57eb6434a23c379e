//! Domain logic - pure version rules independent of files and the terminal

pub mod version;

pub use version::{ChangelogVersion, VersionBump};
