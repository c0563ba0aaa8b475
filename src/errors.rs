// Error types and user-friendly error messages
//
// ClientError classifies the outcome of a single request to the server.
// The formatting helpers turn transport failures into actionable messages
// for verbose mode.

use std::fmt;
use thiserror::Error;

/// Failure of a single request to the Lucifer server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Connection failure, timeout, or failure reading the response body.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a status >= 300. Displays as the body;
    /// `body` holds the bytes exactly as received.
    #[error("{}", String::from_utf8_lossy(.body))]
    Application { status: u16, body: Vec<u8> },
}

impl ClientError {
    /// True when the server could not be reached at all.
    pub fn is_connect(&self) -> bool {
        matches!(self, ClientError::Transport { source, .. } if source.is_connect())
    }

    /// True when the request exceeded its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport { source, .. } if source.is_timeout())
    }

    /// HTTP status for application errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Application { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Format a connection refused error with helpful suggestions
pub fn connection_refused_error(address: &str) -> String {
    format!(
        "Could not connect to the lucifer server at {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Server is not running\n\
        • Server is still loading the test environment\n\
        • Wrong base_url in ~/.lucifer/config.toml\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Start the server from your project and wait for\n\
           \x1b[36mlucifer: listening on {}\x1b[0m\n\n\
        2. Check the configured address:\n\
           \x1b[36mcat ~/.lucifer/config.toml\x1b[0m",
        address, address
    )
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to parse config file\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.lucifer/config.toml\x1b[0m\n\n\
        2. Remove the file to fall back to the defaults:\n\
           \x1b[36mmv ~/.lucifer/config.toml ~/.lucifer/config.toml.backup\x1b[0m",
        error
    )
}

/// Wrap a generic error with suggestions
pub fn wrap_error_with_suggestion(error: impl fmt::Display, suggestion: &str) -> String {
    format!(
        "{}\n\n\
        \x1b[1;33mSuggestion:\x1b[0m {}",
        error, suggestion
    )
}

/// Render a request failure for the verbose log line.
///
/// Application errors are reported as the raw response body.
pub fn describe_client_error(err: &ClientError, base_url: &str) -> String {
    if err.is_connect() {
        connection_refused_error(base_url)
    } else if err.is_timeout() {
        wrap_error_with_suggestion(
            err,
            "The server took too long to answer. Check that it is not blocked on a long test run.",
        )
    } else {
        err.to_string()
    }
}
