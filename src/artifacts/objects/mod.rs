//! Git object identifiers
//!
//! Every object in a pack is addressed by the SHA-1 hash of its content.
//! This module holds the identifier type and its size constants.

pub mod object_id;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in binary format
pub const OBJECT_ID_SIZE: usize = 20;

/// Length of an abbreviated object ID
pub const SHORT_OBJECT_ID_LENGTH: usize = 7;
