//! Fatal resolution errors
//!
//! Every condition here aborts the whole run; there is no per-line
//! recovery. Each variant carries the offending token or line text plus its
//! 1-based source line number so the diagnostic points at the input.

use thiserror::Error;

use super::ident::IDENTIFIER_PATTERN;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Invalid task: [{line_text}] encountered on line: [{line_number}]. Task must include a \":\" separator to be considered valid.")]
    MalformedLine { line_text: String, line_number: usize },

    #[error("Invalid task identifier: [{identifier}] encountered on line: [{line_number}]. Task identifiers must match pattern of {}.", IDENTIFIER_PATTERN)]
    InvalidIdentifier { identifier: String, line_number: usize },

    #[error("Cyclical dependency: [{identifier}] encountered on line: [{line_number}].")]
    CyclicalDependency { identifier: String, line_number: usize },
}
