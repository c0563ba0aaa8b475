// Command-line argument definitions
//
// Flags are written Go-style with a single dash (`-verbose`, `-sync=false`).
// normalize_flags() rewrites them to the double-dash form before clap sees
// them. Flag parsing stops at the first file name or at `--`.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use std::ffi::OsString;

use crate::client::Filename;

/// The Lucifer binary makes requests to the Lucifer server.
#[derive(Parser, Debug)]
#[command(name = "lucifer")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse an argument vector, including the program name.
    ///
    /// Usage and flag errors are returned rather than printed, so the caller
    /// decides how the process exits.
    pub fn try_parse_args<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_flags(argv))
    }

    /// Full help text listing every subcommand
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Verbose flag of whichever subcommand was invoked
    pub fn verbose(&self) -> bool {
        match &self.command {
            Command::Invalidate(args) => args.verbose,
            Command::Run(args) => args.verbose,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Invalidate the cache for a given file
    Invalidate(InvalidateArgs),
    /// Run tests for a given file
    Run(RunArgs),
}

/// Flags and files for `lucifer invalidate`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InvalidateArgs {
    /// Make request synchronously
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub sync: bool,

    /// Verbose output
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Files to invalidate
    #[arg(value_name = "FILE", num_args = 1.., trailing_var_arg = true)]
    pub files: Vec<String>,
}

/// Flags and files for `lucifer run`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    /// Stop after the first test failure
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub bail: bool,

    /// Verbose output
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = false,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Test files to run (all when empty)
    #[arg(value_name = "FILE", num_args = 1.., trailing_var_arg = true)]
    pub files: Vec<String>,
}

impl InvalidateArgs {
    pub fn filenames(&self) -> Vec<Filename> {
        to_filenames(&self.files)
    }
}

impl RunArgs {
    pub fn filenames(&self) -> Vec<Filename> {
        to_filenames(&self.files)
    }
}

fn to_filenames(files: &[String]) -> Vec<Filename> {
    files.iter().cloned().map(Filename::from).collect()
}

/// Rewrite single-dash long flags after the subcommand to their `--` form.
///
/// Only the arguments between the subcommand token and the first file name
/// (or `--`) are touched. Single-letter flags such as `-h` pass through.
pub fn normalize_flags<I, T>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut in_flags = true;

    for (i, arg) in argv.into_iter().map(Into::into).enumerate() {
        // argv[0] is the program, argv[1] the subcommand
        if i < 2 || !in_flags {
            out.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                in_flags = false;
                None
            }
            Some(s) if s.starts_with("--") => None,
            Some(s) if s.starts_with('-') && s.len() > 1 => {
                let name = s[1..].split('=').next().unwrap_or_default();
                if name.chars().count() > 1 {
                    Some(OsString::from(format!("-{}", s)))
                } else {
                    None
                }
            }
            _ => {
                in_flags = false;
                None
            }
        };

        out.push(rewritten.unwrap_or(arg));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(argv: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_args(argv.iter().copied())
    }

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_rewrites_only_flags_before_files() {
        let out = normalize_flags(["lucifer", "run", "-bail", "a.go", "-verbose"]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(out, ["lucifer", "run", "--bail", "a.go", "-verbose"]);
    }

    #[test]
    fn test_normalize_keeps_values_and_short_flags() {
        let out = normalize_flags(["lucifer", "invalidate", "-sync=false", "-h", "--verbose"]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(out, ["lucifer", "invalidate", "--sync=false", "-h", "--verbose"]);
    }

    #[test]
    fn test_normalize_stops_at_double_dash() {
        let out = normalize_flags(["lucifer", "run", "--", "-bail"]);
        let out: Vec<_> = out.iter().map(|s| s.to_str().unwrap()).collect();
        assert_eq!(out, ["lucifer", "run", "--", "-bail"]);
    }

    #[test]
    fn test_invalidate_defaults() {
        let cli = parse(&["lucifer", "invalidate", "a.go", "b.go"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Invalidate(InvalidateArgs {
                sync: true,
                verbose: false,
                files: strings(&["a.go", "b.go"]),
            })
        );
        assert!(!cli.verbose());
    }

    #[test]
    fn test_invalidate_single_dash_flags() {
        let cli = parse(&["lucifer", "invalidate", "-verbose", "-sync=false", "a.go"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Invalidate(InvalidateArgs {
                sync: false,
                verbose: true,
                files: strings(&["a.go"]),
            })
        );
        assert!(cli.verbose());
    }

    #[test]
    fn test_run_flags_and_duplicate_files() {
        let cli = parse(&["lucifer", "run", "-bail", "a.go", "a.go"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Run(RunArgs {
                bail: true,
                verbose: false,
                files: strings(&["a.go", "a.go"]),
            })
        );
    }

    #[test]
    fn test_flags_after_files_are_files() {
        let cli = parse(&["lucifer", "run", "a.go", "-bail"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(!args.bail);
        assert_eq!(args.files, strings(&["a.go", "-bail"]));
    }

    #[test]
    fn test_run_without_files() {
        let cli = parse(&["lucifer", "run"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.files.is_empty());
        assert!(args.filenames().is_empty());
    }

    #[test]
    fn test_flags_are_per_subcommand() {
        let err = parse(&["lucifer", "invalidate", "-bail", "a.go"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);

        let err = parse(&["lucifer", "run", "-sync", "a.go"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_bad_flag_value_is_an_error() {
        let err = parse(&["lucifer", "run", "-bail=maybe"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_unknown_subcommand_is_usage_error() {
        let err = parse(&["lucifer", "frobnicate"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_subcommand_is_usage_error() {
        let err = parse(&["lucifer"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_help_exits_zero() {
        let err = parse(&["lucifer", "help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_usage_lists_every_subcommand() {
        let usage = Cli::usage();
        assert!(usage.contains("Usage: lucifer"));
        assert!(usage.contains("Invalidate the cache for a given file"));
        assert!(usage.contains("Run tests for a given file"));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
