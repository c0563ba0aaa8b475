// Lucifer wire types
//
// Request bodies for the two endpoints the server exposes.
// Responses are never parsed; they are passed through as text.

use serde::{Deserialize, Serialize};

/// A file path as understood by the server. Not validated client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filename(pub String);

impl From<String> for Filename {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&str> for Filename {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Request body for /v1/cache/invalidate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidateRequest {
    /// Files whose cached state should be dropped, in command-line order
    pub files: Vec<Filename>,
}

/// Request body for /v1/test_runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    /// Stop after the first failing test
    pub bail: bool,
    /// Test files to run (empty means all)
    pub files: Vec<Filename>,
    /// Test name filter; the CLI never sets it, so it is always sent as ""
    pub grep: String,
}

impl RunRequest {
    pub fn new(files: Vec<Filename>, bail: bool) -> Self {
        Self {
            bail,
            files,
            grep: String::new(),
        }
    }
}
