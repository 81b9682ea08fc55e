//! Loaded pack index
//!
//! The whole `.idx` file is parsed into memory once. Lookups then run in two
//! steps: the fanout table narrows the search to the objects sharing the
//! target's first byte, and a binary search inside that bucket finds the
//! exact entry.
//!
//! ## Offsets
//!
//! Each object has a 32-bit entry in the offset table. Packs larger than 2GB
//! store some offsets in a secondary table of 64-bit values; an entry with its
//! most significant bit set holds the index into that table in its low 31 bits.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::pack::fanout::FanoutTable;
use crate::artifacts::pack::offset_entry::OffsetEntry;
use crate::artifacts::pack::pack_entry::PackIndexEntry;
use crate::artifacts::pack::pack_index_header::PackIndexHeader;
use crate::artifacts::pack::table_reader::TableReader;
use crate::artifacts::pack::{CRC_SIZE, FANOUT_SIZE, HEADER_SIZE, Unpackable};
use crate::errors::{PackIndexError, Result};
use std::io::{BufReader, Read};
use std::path::Path;

/// In-memory version 2 pack index
///
/// Immutable once loaded, so it can be shared between threads without locking.
#[derive(Debug, Clone)]
pub struct PackIndex {
    header: PackIndexHeader,
    fanout: FanoutTable,
    /// Object IDs in file order, which is ascending
    object_ids: Vec<ObjectId>,
    /// Offset table entries, aligned with `object_ids`
    offsets: Vec<OffsetEntry>,
    large_offsets: Vec<u64>,
}

impl PackIndex {
    /// Load a pack index from disk
    ///
    /// The file is only held open for the duration of this call.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse a pack index from any byte stream
    ///
    /// Reads up to and including the large offset table. The trailing pack
    /// and index checksums are left unread.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = TableReader::new(reader);

        let header = PackIndexHeader::deserialize(reader.read(HEADER_SIZE)?)?;
        header.validate()?;
        debug_log!("Pack index header accepted (version {})", header.version());

        // The last entry of the fanout table is the number of objects
        let fanout = FanoutTable::deserialize(reader.read(FANOUT_SIZE)?)?;
        let count = fanout.total() as usize;
        debug_log!("Pack index holds {} objects", count);

        let object_ids = reader.read_object_ids(count)?;

        // CRC-32 values are not needed for offset lookups
        reader.skip(count * CRC_SIZE)?;

        let offsets = reader
            .read_u32_table(count)?
            .into_iter()
            .map(OffsetEntry::from_raw)
            .collect::<Vec<_>>();

        let large_count = offsets.iter().filter(|entry| entry.is_large()).count();
        let large_offsets = match large_count {
            0 => Vec::new(),
            n => reader.read_u64_table(n)?,
        };
        debug_log!(
            "Read {} large offsets, stopped at byte {}",
            large_count,
            reader.position()
        );

        if let Some(index) = offsets.iter().find_map(|entry| match entry {
            OffsetEntry::Large(index) if *index as usize >= large_offsets.len() => Some(*index),
            _ => None,
        }) {
            return Err(PackIndexError::InvalidFormat(format!(
                "large offset index {index} out of range ({} entries)",
                large_offsets.len()
            )));
        }

        Ok(PackIndex {
            header,
            fanout,
            object_ids,
            offsets,
            large_offsets,
        })
    }

    /// Locate the pack file offset of an object
    ///
    /// # Returns
    ///
    /// The byte offset of the object in the pack file, or `ObjectNotFound`
    pub fn offset_of(&self, oid: &ObjectId) -> Result<u64> {
        let position = self
            .position_of(oid)
            .ok_or(PackIndexError::ObjectNotFound(*oid))?;

        self.resolve_offset(position)
    }

    pub fn contains(&self, oid: &ObjectId) -> bool {
        self.position_of(oid).is_some()
    }

    /// Position of an object in the identifier table
    ///
    /// Only the fanout bucket of the object's first byte is searched; the
    /// match found inside the bucket is shifted back by the bucket start.
    fn position_of(&self, oid: &ObjectId) -> Option<usize> {
        let bucket = self.fanout.range(oid.first_byte());
        let start = bucket.start;
        let candidates = self.object_ids.get(bucket)?;

        candidates
            .binary_search(oid)
            .ok()
            .map(|local| start + local)
    }

    fn resolve_offset(&self, position: usize) -> Result<u64> {
        match self.offsets[position] {
            OffsetEntry::Direct(offset) => Ok(offset as u64),
            OffsetEntry::Large(index) => {
                self.large_offsets
                    .get(index as usize)
                    .copied()
                    .ok_or_else(|| {
                        PackIndexError::InvalidFormat(format!(
                            "large offset index {index} out of range"
                        ))
                    })
            }
        }
    }

    /// All objects with their resolved offsets, in identifier table order
    pub fn entries(&self) -> impl Iterator<Item = Result<PackIndexEntry>> + '_ {
        self.object_ids
            .iter()
            .enumerate()
            .map(|(position, oid)| {
                self.resolve_offset(position)
                    .map(|offset| PackIndexEntry::new(*oid, offset))
            })
    }

    pub fn object_ids(&self) -> &[ObjectId] {
        &self.object_ids
    }

    pub fn fanout(&self) -> &FanoutTable {
        &self.fanout
    }

    pub fn version(&self) -> u32 {
        self.header.version()
    }

    pub fn len(&self) -> usize {
        self.object_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }

    pub fn large_offset_count(&self) -> usize {
        self.large_offsets.len()
    }
}
