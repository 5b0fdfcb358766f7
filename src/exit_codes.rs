//! Exit code constants for the qnn-options CLI.
//!
//! - 0: Success
//! - 1: Usage error (bad arguments, unreadable input)
//! - 2: Validation failure (unknown option, illegal value, malformed document)
//! - 3: Profile failure (profile file could not be parsed)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Usage error: bad arguments or unreadable input files.
pub const USAGE_ERROR: i32 = 1;

/// Validation failure: the document or option set is not acceptable to the backend.
pub const VALIDATION_FAILURE: i32 = 2;

/// Profile failure: a YAML profile could not be parsed.
pub const PROFILE_FAILURE: i32 = 3;
