//! Loaded pack index state
//!
//! - `pack_index`: The parsed index and its offset lookups
//! - `inspector`: Output sink and index loading shared by the CLI commands

pub mod inspector;
pub mod pack_index;
