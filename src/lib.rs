//! Reader for Git version-2 pack index files
//!
//! A pack index (`.idx`) maps object IDs to byte offsets in the companion
//! pack file. This crate parses the whole index into memory and answers
//! offset lookups against it.
//!
//! - `artifacts`: on-disk data structures (object IDs, header, fanout, offsets)
//! - `areas`: the loaded pack index and the inspector used by the CLI
//! - `commands`: CLI command implementations
//! - `errors`: typed errors returned by the library

/// Macro for debug logging that is enabled with the debug_pack feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("Read {} object IDs", count);
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_pack")]
        {
            eprintln!($($arg)*);
        }
    };
}

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;

pub use areas::pack_index::PackIndex;
pub use artifacts::objects::object_id::ObjectId;
pub use errors::{PackIndexError, Result};
