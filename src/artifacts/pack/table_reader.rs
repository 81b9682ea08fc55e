use crate::artifacts::objects::OBJECT_ID_SIZE;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::pack::{LARGE_OFFSET_SIZE, OFFSET_SIZE};
use crate::errors::Result;
use byteorder::{NetworkEndian, ReadBytesExt};
use bytes::Bytes;
use std::io::{self, Read};

/// Sequential reader over the sections of a pack index
///
/// Every read is exact: running out of input surfaces as an
/// `UnexpectedEof` IO error instead of a partially filled table.
#[derive(Debug)]
pub struct TableReader<R> {
    inner: R,
    position: u64,
}

impl<R: Read> TableReader<R> {
    pub fn new(inner: R) -> Self {
        TableReader { inner, position: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn read(&mut self, size: usize) -> Result<Bytes> {
        let mut buffer = vec![0; size];
        self.inner.read_exact(&mut buffer)?;

        self.position += size as u64;
        Ok(Bytes::from(buffer))
    }

    /// Discard exactly `size` bytes
    pub fn skip(&mut self, size: usize) -> Result<()> {
        let skipped = io::copy(&mut (&mut self.inner).take(size as u64), &mut io::sink())?;
        self.position += skipped;

        if skipped < size as u64 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("expected to skip {size} bytes, only {skipped} available"),
            )
            .into());
        }

        Ok(())
    }

    // Tables grow as they are read so a bogus object count in a truncated
    // file fails on EOF instead of allocating up front.
    pub fn read_object_ids(&mut self, count: usize) -> Result<Vec<ObjectId>> {
        let object_ids = (0..count)
            .map(|_| ObjectId::read_from(&mut self.inner))
            .collect::<Result<Vec<_>>>()?;

        self.position += (count * OBJECT_ID_SIZE) as u64;
        Ok(object_ids)
    }

    pub fn read_u32_table(&mut self, count: usize) -> Result<Vec<u32>> {
        let table = (0..count)
            .map(|_| self.inner.read_u32::<NetworkEndian>())
            .collect::<io::Result<Vec<_>>>()?;

        self.position += (count * OFFSET_SIZE) as u64;
        Ok(table)
    }

    pub fn read_u64_table(&mut self, count: usize) -> Result<Vec<u64>> {
        let table = (0..count)
            .map(|_| self.inner.read_u64::<NetworkEndian>())
            .collect::<io::Result<Vec<_>>>()?;

        self.position += (count * LARGE_OFFSET_SIZE) as u64;
        Ok(table)
    }
}
