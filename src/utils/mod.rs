//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `suggest` - "Did you mean" matching for identifiers
//! - `template` - String template rendering

pub mod io;
pub mod suggest;
pub(crate) mod template;
