//! Exit code constants for the inidoc CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config file)
//! - 2: File failure (empty, unreadable or unwritable path)
//! - 3: Parse failure (malformed line or policy violation)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid parse configuration.
pub const USER_ERROR: i32 = 1;

/// File failure: the path is empty, unreadable, or unwritable.
pub const FILE_FAILURE: i32 = 2;

/// Parse failure: malformed INI text or a duplicate rejected by policy.
pub const PARSE_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, FILE_FAILURE, PARSE_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
