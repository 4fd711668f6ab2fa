//! Exit code constants for the resxcheck CLI.
//!
//! The exit surface is deliberately binary:
//! - 0: no changed files of the target extension, or all changed files pass
//! - 1: bad arguments, a git failure, or at least one file failing validation

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, git operation failure, or bracket validation failure.
pub const FAILURE: i32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        assert_ne!(SUCCESS, FAILURE);
    }

    #[test]
    fn exit_codes_match_contract() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(FAILURE, 1);
    }
}
