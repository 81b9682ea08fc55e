use crate::artifacts::pack::{HEADER_SIZE, SIGNATURE, Unpackable, VERSION};
use crate::errors::{PackIndexError, Result};
use byteorder::ByteOrder;
use bytes::Bytes;
use derive_new::new;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct PackIndexHeader {
    pub(crate) signature: [u8; 4],
    pub(crate) version: u32,
}

impl PackIndexHeader {
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Check the magic signature and the format version
    ///
    /// Version 1 indexes have no signature at all, so they are reported as
    /// an invalid format rather than an unsupported version.
    pub fn validate(&self) -> Result<()> {
        if self.signature != SIGNATURE {
            return Err(PackIndexError::InvalidFormat(format!(
                "bad signature {:02x?}",
                self.signature
            )));
        }

        if self.version != VERSION {
            return Err(PackIndexError::UnsupportedVersion(self.version));
        }

        Ok(())
    }
}

impl Unpackable for PackIndexHeader {
    fn deserialize(bytes: Bytes) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(PackIndexError::InvalidFormat(
                "Invalid header size".to_string(),
            ));
        }

        let mut signature = [0u8; 4];
        signature.copy_from_slice(&bytes[0..4]);
        let version = byteorder::NetworkEndian::read_u32(&bytes[4..8]);

        Ok(PackIndexHeader { signature, version })
    }
}
