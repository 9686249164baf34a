//! Task identifier validation
//!
//! Identifiers are short alphabetic names (`Build`, `VirusScan`). The
//! accepted shape is a fixed configuration constant, not runtime state, so
//! diagnostics can quote it verbatim.

use std::sync::LazyLock;

use regex::Regex;

/// Shape every task identifier must match: 1-20 letters, either case.
pub const IDENTIFIER_PATTERN: &str = "^[A-Za-z]{1,20}$";

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is a valid literal"));

/// Returns true if `token` is a well-formed task identifier.
///
/// Tokens are checked verbatim: surrounding whitespace, digits, or
/// punctuation all fail the shape.
pub fn is_valid_identifier(token: &str) -> bool {
    IDENTIFIER_REGEX.is_match(token)
}
