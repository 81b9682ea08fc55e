//! Git object identifier (SHA-1 hash)
//!
//! Object IDs are 20-byte SHA-1 digests. Inside a pack index they are stored
//! raw; at the boundary they are written as 40 lowercase hexadecimal characters.
//!
//! ## Ordering
//!
//! IDs compare byte by byte as unsigned values, which is the order the
//! identifier table of a pack index is sorted in.

use crate::artifacts::objects::{OBJECT_ID_LENGTH, OBJECT_ID_SIZE, SHORT_OBJECT_ID_LENGTH};
use crate::errors::{PackIndexError, Result};
use std::io;
use std::str::FromStr;

/// Git object identifier (SHA-1 hash)
///
/// Holds the raw 20 bytes of the digest. The derived ordering is the
/// lexicographic order of those bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_SIZE]);

impl ObjectId {
    pub fn from_bytes(bytes: [u8; OBJECT_ID_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parse and validate an object ID from a hexadecimal string
    ///
    /// # Arguments
    ///
    /// * `id` - 40-character hexadecimal string (either case)
    ///
    /// # Returns
    ///
    /// Validated ObjectId or `MalformedIdentifier` if invalid length/characters
    pub fn try_parse(id: &str) -> Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(malformed(id, format!("invalid length {}", id.len())));
        }
        if !id.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Err(malformed(id, "invalid hexadecimal characters".to_string()));
        }

        let mut bytes = [0u8; OBJECT_ID_SIZE];
        // Process a nibble pair at a time
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&id[i * 2..i * 2 + 2], 16)
                .map_err(|err| malformed(id, err.to_string()))?;
        }

        Ok(Self(bytes))
    }

    /// Read an object ID from binary format (20 bytes)
    pub fn read_from<R: io::Read + ?Sized>(reader: &mut R) -> Result<Self> {
        let mut bytes = [0u8; OBJECT_ID_SIZE];
        reader.read_exact(&mut bytes)?;

        Ok(Self(bytes))
    }

    /// Write the object ID in binary format (20 bytes)
    pub fn write_to<W: io::Write + ?Sized>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.0)?;
        Ok(())
    }

    pub fn as_bytes(&self) -> &[u8; OBJECT_ID_SIZE] {
        &self.0
    }

    /// First byte of the digest, used to select a fanout bucket
    pub fn first_byte(&self) -> u8 {
        self.0[0]
    }

    /// Get abbreviated form of the object ID
    ///
    /// # Returns
    ///
    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        let mut short = self.to_string();
        short.truncate(SHORT_OBJECT_ID_LENGTH);
        short
    }
}

fn malformed(input: &str, reason: String) -> PackIndexError {
    PackIndexError::MalformedIdentifier {
        input: input.to_string(),
        reason,
    }
}

impl FromStr for ObjectId {
    type Err = PackIndexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_parse(s)
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
