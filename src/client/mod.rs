// HTTP client for the Lucifer server
//
// Provides LuciferClient and the two request operations the CLI issues.
// Handles request construction and response classification.

mod lucifer_client;
mod types;

pub use lucifer_client::{
    execute_invalidate, execute_run, LuciferClient, ACCEPT_VALUE, USER_AGENT_VALUE,
};
pub use types::{Filename, InvalidateRequest, RunRequest};
