//! Git pack index file format
//!
//! A pack index maps every object stored in a pack file to its byte offset.
//! Only version 2 is supported.
//!
//! ## File Format (Version 2)
//!
//! ```text
//! Header (8 bytes):
//!   - Signature: FF 74 4F 63 (4 bytes)
//!   - Version: 2 (4 bytes)
//!
//! Fanout table (1024 bytes):
//!   - 256 cumulative object counts keyed by first hash byte
//!
//! Tables (N = fanout[255]):
//!   - Object IDs, sorted ascending (N * 20 bytes)
//!   - CRC-32 of each packed object (N * 4 bytes)
//!   - Offsets into the pack file (N * 4 bytes)
//!   - Large offsets for packs over 2GB (M * 8 bytes)
//!
//! Trailer (40 bytes):
//!   - SHA-1 of the pack file
//!   - SHA-1 of all preceding index bytes
//! ```
//!
//! All integers are big-endian.

pub mod fanout;
pub mod offset_entry;
pub mod pack_entry;
pub mod pack_index_header;
pub mod table_reader;

use crate::errors::Result;
use bytes::Bytes;

/// Magic signature identifying version 2+ pack index files
pub const SIGNATURE: [u8; 4] = [0xFF, 0x74, 0x4F, 0x63]; // "\377tOc"

/// Pack index file format version
pub const VERSION: u32 = 2;

/// Size of pack index header in bytes
pub const HEADER_SIZE: usize = 8; // 4 bytes for signature, 4 for version

/// Number of entries in the fanout table
pub const FANOUT_ENTRIES: usize = 256;

/// Size of the fanout table in bytes
pub const FANOUT_SIZE: usize = FANOUT_ENTRIES * 4;

/// Size of a CRC-32 table entry in bytes
pub const CRC_SIZE: usize = 4;

/// Size of an offset table entry in bytes
pub const OFFSET_SIZE: usize = 4;

/// Size of a large offset table entry in bytes
pub const LARGE_OFFSET_SIZE: usize = 8;

/// Most significant bit of an offset entry, set when it points into the large offset table
pub const LARGE_OFFSET_FLAG: u32 = 0x8000_0000;

/// Size of each trailing SHA-1 checksum in bytes
pub const CHECKSUM_SIZE: usize = 20;

/// Fixed-size structures decoded from a raw byte block
pub trait Unpackable {
    fn deserialize(bytes: Bytes) -> Result<Self>
    where
        Self: Sized;
}
