//! Pack index command implementations
//!
//! All commands are plumbing: they print raw index data for scripting,
//! in the spirit of `git show-index`.

pub mod plumbing;
