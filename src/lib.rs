// Lucifer - command-line client for the Lucifer test server
// Library exports

pub mod cli; // Subcommand parsing and exit policy
pub mod client; // HTTP client for the server
pub mod config;
pub mod errors;
pub mod exit_codes;
