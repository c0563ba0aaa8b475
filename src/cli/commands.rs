// Subcommand handlers
//
// Each handler turns its parsed flags into one request. report() applies the
// verbose/quiet policy and picks the exit code; nothing here exits the process.

use std::io::Write;

use tracing::{debug, error};

use super::args::{Command, InvalidateArgs, RunArgs};
use crate::client::{execute_invalidate, execute_run};
use crate::config::ClientConfig;
use crate::errors::{self, ClientError};
use crate::exit_codes;

/// A failed request, together with what report() needs to decide its fate
#[derive(Debug)]
pub struct RequestFailure {
    pub error: ClientError,
    pub verbose: bool,
    pub base_url: String,
}

/// Run the handler for `command`
pub async fn dispatch(
    command: Command,
    config: ClientConfig,
) -> Result<Vec<u8>, RequestFailure> {
    match command {
        Command::Invalidate(args) => invalidate(args, config).await,
        Command::Run(args) => run(args, config).await,
    }
}

/// `lucifer invalidate [-sync] [-verbose] FILE...`
pub async fn invalidate(
    args: InvalidateArgs,
    config: ClientConfig,
) -> Result<Vec<u8>, RequestFailure> {
    // sync is accepted and carried, but the server only has a synchronous endpoint
    debug!(sync = args.sync, files = ?args.files, "invalidate");

    let base_url = config.base_url.clone();
    execute_invalidate(config, args.filenames())
        .await
        .map_err(|error| RequestFailure {
            error,
            verbose: args.verbose,
            base_url,
        })
}

/// `lucifer run [-bail] [-verbose] FILE...`
pub async fn run(args: RunArgs, config: ClientConfig) -> Result<Vec<u8>, RequestFailure> {
    debug!(bail = args.bail, files = ?args.files, "run");

    let base_url = config.base_url.clone();
    execute_run(config, args.filenames(), args.bail)
        .await
        .map_err(|error| RequestFailure {
            error,
            verbose: args.verbose,
            base_url,
        })
}

/// Print the outcome of a request and return the process exit code.
///
/// Success writes the body bytes unchanged, followed by a newline. A failure
/// is logged and fatal in verbose mode, and silently discarded otherwise.
pub fn report(result: Result<Vec<u8>, RequestFailure>, out: &mut impl Write) -> u8 {
    match result {
        Ok(body) => {
            if let Err(e) = out.write_all(&body).and_then(|()| out.write_all(b"\n")) {
                debug!(error = %e, "Failed to write response body");
            }
            exit_codes::SUCCESS
        }
        Err(failure) if failure.verbose => {
            error!(
                status = ?failure.error.status(),
                "{}",
                errors::describe_client_error(&failure.error, &failure.base_url)
            );
            exit_codes::FATAL
        }
        Err(failure) => {
            debug!(
                status = ?failure.error.status(),
                error = %failure.error,
                "Request failed, ignoring (not verbose)"
            );
            exit_codes::SUCCESS
        }
    }
}
