//! Plumbing commands (low-level pack index inspection)
//!
//! ## Commands
//!
//! - `show-index`: List every object with its pack offset
//! - `offset-of`: Print the pack offset of a single object
//! - `stats`: Print header and table sizes

pub mod offset_of;
pub mod show_index;
pub mod stats;
