//! CLI argument parsing using clap

use crate::cli::bump::BumpOptions;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Automatically detect if terminal supports color
    Auto,
    /// Always use color
    Always,
    /// Never use color
    Never,
}

/// bumpver CLI main entry point
///
/// Exactly one positional argument is accepted. Clap reports a missing or
/// extra positional with a usage line on stderr and exit status 2.
#[derive(Parser, Debug)]
#[command(name = "bumpver")]
#[command(about = "Bump the manifest version and keep the lockfile entry in sync")]
#[command(version)]
pub struct Cli {
    /// Version component to bump: major, minor or patch (case-insensitive)
    pub kind: String,

    /// Project root containing the manifest and lockfile
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Manifest path, relative to the root unless absolute [default: Cargo.toml]
    #[arg(long)]
    pub manifest_path: Option<PathBuf>,

    /// Lockfile path, relative to the root unless absolute [default: Cargo.lock]
    #[arg(long)]
    pub lockfile: Option<PathBuf>,

    /// Lockfile entry to update (defaults to the manifest's package name)
    #[arg(long)]
    pub package: Option<String>,

    /// Compute and report the new version without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Output coloring
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}

impl Cli {
    /// Converts parsed arguments into options for the bump command
    pub fn options(&self) -> BumpOptions {
        BumpOptions {
            kind: self.kind.clone(),
            root: self.root.clone(),
            manifest_path: self.manifest_path.clone(),
            lockfile: self.lockfile.clone(),
            package: self.package.clone(),
            dry_run: self.dry_run,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_single_kind() {
        let cli = Cli::parse_from(["bumpver", "patch"]);
        assert_eq!(cli.kind, "patch");
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.manifest_path, None);
        assert_eq!(cli.lockfile, None);
        assert_eq!(cli.package, None);
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.color, ColorChoice::Auto);
    }

    #[test]
    fn test_kind_is_passed_through_verbatim() {
        // Validation happens in the bump command so the error names the kind
        let cli = Cli::parse_from(["bumpver", "MAJOR"]);
        assert_eq!(cli.kind, "MAJOR");
    }

    #[test]
    fn test_missing_kind_is_usage_error() {
        let err = Cli::try_parse_from(["bumpver"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_extra_positional_is_usage_error() {
        let err = Cli::try_parse_from(["bumpver", "patch", "minor"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("minor"));
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::parse_from([
            "bumpver",
            "--root",
            "/srv/project",
            "--manifest-path",
            "crates/app/Cargo.toml",
            "--lockfile",
            "Cargo.lock",
            "--package",
            "app",
            "--dry-run",
            "-vv",
            "--color",
            "never",
            "minor",
        ]);
        let options = cli.options();
        assert_eq!(options.kind, "minor");
        assert_eq!(options.root, PathBuf::from("/srv/project"));
        assert_eq!(
            options.manifest_path,
            Some(PathBuf::from("crates/app/Cargo.toml"))
        );
        assert_eq!(options.lockfile, Some(PathBuf::from("Cargo.lock")));
        assert_eq!(options.package.as_deref(), Some("app"));
        assert!(options.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_invalid_color() {
        let result = Cli::try_parse_from(["bumpver", "--color", "invalid", "patch"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_help_contains_about() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("Bump the manifest version"));
    }

    #[test]
    fn test_version_flag() {
        let err = Cli::try_parse_from(["bumpver", "--version"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayVersion);
    }
}
