//! Exit code constants for the lucifer CLI.
//!
//! - 0: Success, or a request failure swallowed because `-verbose` was not given
//! - 1: Fatal error (request failure in verbose mode, unreadable config)
//! - 2: Usage error (unknown or missing subcommand, malformed flags)

/// Successful execution.
pub const SUCCESS: u8 = 0;

/// Fatal error reported through the log.
pub const FATAL: u8 = 1;

/// Usage error: unknown subcommand, missing subcommand, or bad flags.
pub const USAGE: u8 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, FATAL, USAGE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn usage_matches_clap() {
        let err = clap::Error::new(clap::error::ErrorKind::InvalidSubcommand);
        assert_eq!(err.exit_code(), USAGE as i32);
    }
}
