//! Pack index data structures
//!
//! This module contains the on-disk types of a version-2 pack index:
//!
//! - `objects`: Object identifiers (SHA-1 hashes)
//! - `pack`: Header, fanout table, offset entries and the table reader

pub mod objects;
pub mod pack;
