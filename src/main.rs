use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use changelog_bump::cli::{run_bump, BumpArgs, BumpOutcome};
use changelog_bump::config;
use changelog_bump::error::exit_code;
use changelog_bump::ui;
use changelog_bump::BumpError;

#[derive(clap::Parser)]
#[command(
    name = "changelog-bump",
    version,
    about = "Bump the version in a CHANGELOG and the matching ruby lib version file"
)]
struct Args {
    #[arg(long, help = "CHANGELOG.md filename to read")]
    filename: Option<PathBuf>,

    #[arg(long, help = "Comment to add into the CHANGELOG.md ('\\n' starts a new line)")]
    comment: Option<String>,

    #[arg(long, help = "Bump the major version")]
    major: bool,

    #[arg(long, help = "Bump the minor version")]
    minor: bool,

    #[arg(long, help = "Bump the patch version")]
    patch: bool,

    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        help = "Update the version in the ruby lib version file 'lib/*/version.rb'"
    )]
    ruby_lib: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the changes without writing any file")]
    dry_run: bool,
}

impl Args {
    fn into_bump_args(self) -> BumpArgs {
        BumpArgs {
            filename: self.filename.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            ruby_lib: self.ruby_lib,
            dry_run: self.dry_run,
            working_dir: PathBuf::from("."),
        }
    }
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            e.print()?;
            std::process::exit(exit_code::OPTIONS);
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => fail(&e),
    };

    let bump_args = args.into_bump_args();
    match run_bump(&bump_args, &config) {
        Ok(outcome) => report(&outcome),
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(error: &BumpError) -> ! {
    ui::display_error(&error.to_string());
    std::process::exit(error.exit_code());
}

fn report(outcome: &BumpOutcome) {
    let changelog = outcome.changelog_path.display().to_string();

    if outcome.dry_run {
        ui::display_status("Dry run: no files were written");
        ui::display_dry_run(&changelog, &outcome.changelog);
    }
    ui::display_version_change(
        &changelog,
        &outcome.previous.to_string(),
        &outcome.version.to_string(),
    );

    if let Some(version_file) = &outcome.version_file {
        if let Some(previous) = &version_file.previous {
            let path = version_file.path.display().to_string();
            if outcome.dry_run {
                ui::display_dry_run(&path, &version_file.contents);
            }
            ui::display_version_change(&path, previous, &outcome.version.to_string());
        }
    }

    for warning in &outcome.warnings {
        ui::display_bump_warning(warning);
    }
}
