// Lucifer - command-line client for the Lucifer test server
// Main entry point

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::error::ErrorKind;
use lucifer::cli::{self, Cli};
use lucifer::config::load_config;
use lucifer::exit_codes;
use tracing_subscriber::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage and flag errors are fatal regardless of -verbose
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            if err.kind() == ErrorKind::InvalidSubcommand {
                eprintln!("\n{}", Cli::usage());
            }
            let code = if err.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS // --help, --version
            };
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.verbose());

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{:#}", e);
            return ExitCode::from(exit_codes::FATAL);
        }
    };

    ExitCode::from(cli::execute(cli, config.client).await)
}

/// Initialize tracing on stderr
///
/// Default: warnings only, or debug for this crate with -verbose.
/// RUST_LOG overrides both.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,lucifer=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    // Bridge log crate → tracing (reqwest logs through `log`)
    tracing_log::LogTracer::init().ok();
}
