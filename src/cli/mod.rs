// CLI module
// Public interface for command-line interface

pub mod args;
mod commands;

pub use args::{normalize_flags, Cli, Command, InvalidateArgs, RunArgs};
pub use commands::{dispatch, invalidate, report, run, RequestFailure};

use crate::config::ClientConfig;

/// Execute a parsed command line and return the process exit code
pub async fn execute(cli: Cli, config: ClientConfig) -> u8 {
    let result = dispatch(cli.command, config).await;
    report(result, &mut std::io::stdout().lock())
}
