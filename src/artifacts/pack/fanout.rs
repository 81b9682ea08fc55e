//! Fanout table of a pack index
//!
//! Entry `b` holds the number of objects whose first hash byte is `<= b`,
//! so the objects starting with `b` occupy the half-open range
//! `fanout[b - 1]..fanout[b]` of the sorted identifier table.

use crate::artifacts::pack::{FANOUT_ENTRIES, FANOUT_SIZE, Unpackable};
use crate::errors::{PackIndexError, Result};
use byteorder::{NetworkEndian, ReadBytesExt};
use bytes::Bytes;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanoutTable([u32; FANOUT_ENTRIES]);

impl FanoutTable {
    pub fn new(table: [u32; FANOUT_ENTRIES]) -> Self {
        FanoutTable(table)
    }

    /// Index range of the identifier table holding IDs that start with `first_byte`
    ///
    /// A malformed table with a decreasing pair yields an empty range.
    pub fn range(&self, first_byte: u8) -> Range<usize> {
        let end = self.0[first_byte as usize] as usize;
        let start = match first_byte {
            0 => 0,
            b => self.0[b as usize - 1] as usize,
        };

        start..end.max(start)
    }

    pub fn bucket_len(&self, first_byte: u8) -> usize {
        self.range(first_byte).len()
    }

    /// Total number of objects in the pack
    pub fn total(&self) -> u32 {
        self.0[FANOUT_ENTRIES - 1]
    }

    pub fn get(&self, first_byte: u8) -> u32 {
        self.0[first_byte as usize]
    }
}

impl Unpackable for FanoutTable {
    fn deserialize(bytes: Bytes) -> Result<Self> {
        if bytes.len() < FANOUT_SIZE {
            return Err(PackIndexError::InvalidFormat(
                "Invalid fanout table size".to_string(),
            ));
        }

        let mut table = [0u32; FANOUT_ENTRIES];
        let mut reader = &bytes[..FANOUT_SIZE];
        reader.read_u32_into::<NetworkEndian>(&mut table)?;

        Ok(FanoutTable(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    /// Two objects starting with 0x00, one with 0x05 and one with 0xff
    #[fixture]
    fn fanout() -> FanoutTable {
        let mut table = [0u32; FANOUT_ENTRIES];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = match i {
                0..=4 => 2,
                5..=254 => 3,
                _ => 4,
            };
        }
        FanoutTable::new(table)
    }

    #[rstest]
    fn test_range_per_bucket(fanout: FanoutTable) {
        pretty_assertions::assert_eq!(fanout.range(0x00), 0..2);
        pretty_assertions::assert_eq!(fanout.range(0x01), 2..2);
        pretty_assertions::assert_eq!(fanout.range(0x05), 2..3);
        pretty_assertions::assert_eq!(fanout.range(0xfe), 3..3);
        pretty_assertions::assert_eq!(fanout.range(0xff), 3..4);
        pretty_assertions::assert_eq!(fanout.total(), 4);
    }

    #[rstest]
    fn test_bucket_lengths_sum_to_total(fanout: FanoutTable) {
        let sum: usize = (0..=255u8).map(|b| fanout.bucket_len(b)).sum();

        pretty_assertions::assert_eq!(sum, fanout.total() as usize);
    }

    #[test]
    fn test_decreasing_table_gives_empty_range() {
        let mut table = [5u32; FANOUT_ENTRIES];
        table[10] = 1;
        let fanout = FanoutTable::new(table);

        assert!(fanout.range(10).is_empty());
    }

    #[rstest]
    fn test_deserialize_big_endian(fanout: FanoutTable) {
        let bytes = fanout
            .0
            .iter()
            .flat_map(|count| count.to_be_bytes())
            .collect::<Vec<_>>();

        let parsed = FanoutTable::deserialize(Bytes::from(bytes)).unwrap();
        pretty_assertions::assert_eq!(parsed, fanout);
        pretty_assertions::assert_eq!(parsed.get(0x05), 3);
    }

    #[test]
    fn test_deserialize_short_table() {
        let err = FanoutTable::deserialize(Bytes::from(vec![0u8; 100])).unwrap_err();

        assert!(matches!(err, PackIndexError::InvalidFormat(_)));
    }
}
