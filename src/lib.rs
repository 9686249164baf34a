//! depline - Resolve task dependency lists into execution order
//!
//! Input is plain text: one `identifier:dep,dep,...` record per line, blank
//! lines separating independent blocks, `#` starting comments. Each block
//! becomes one output line listing its tasks dependency-first.

pub mod cli;
pub mod domain;

pub use domain::{Forest, ResolveError, Task};
