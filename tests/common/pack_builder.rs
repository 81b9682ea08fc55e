use assert_fs::TempDir;
use assert_fs::prelude::*;
use byteorder::{NetworkEndian, WriteBytesExt};
use derive_new::new;
use packidx::ObjectId;
use packidx::artifacts::pack::{CHECKSUM_SIZE, FANOUT_ENTRIES, SIGNATURE, VERSION};
use std::path::PathBuf;

/// Description of a pack index to serialize in tests
///
/// Objects are sorted before writing. Offsets are raw offset table values,
/// so large offset entries are given as `0x8000_0000 | index`.
#[derive(Debug, Clone, new)]
pub struct PackIndexSpec {
    pub objects: Vec<(ObjectId, u32)>,
    #[new(default)]
    pub large_offsets: Vec<u64>,
    #[new(value = "SIGNATURE")]
    pub signature: [u8; 4],
    #[new(value = "VERSION")]
    pub version: u32,
}

impl PackIndexSpec {
    pub fn with_large_offsets(mut self, large_offsets: Vec<u64>) -> Self {
        self.large_offsets = large_offsets;
        self
    }

    pub fn with_signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut objects = self.objects.clone();
        objects.sort();

        let mut fanout = [0u32; FANOUT_ENTRIES];
        for (oid, _) in &objects {
            fanout[oid.first_byte() as usize] += 1;
        }
        for i in 1..FANOUT_ENTRIES {
            fanout[i] += fanout[i - 1];
        }

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.signature);
        bytes.write_u32::<NetworkEndian>(self.version).unwrap();
        for count in fanout {
            bytes.write_u32::<NetworkEndian>(count).unwrap();
        }
        for (oid, _) in &objects {
            oid.write_to(&mut bytes).unwrap();
        }
        for (i, _) in objects.iter().enumerate() {
            bytes.write_u32::<NetworkEndian>(0xc0ffee00 + i as u32).unwrap();
        }
        for (_, offset) in &objects {
            bytes.write_u32::<NetworkEndian>(*offset).unwrap();
        }
        for offset in &self.large_offsets {
            bytes.write_u64::<NetworkEndian>(*offset).unwrap();
        }
        bytes.extend_from_slice(&[0xab; CHECKSUM_SIZE * 2]);

        bytes
    }

    pub fn write_to(&self, dir: &TempDir, name: &str) -> PathBuf {
        let file = dir.child(name);
        file.write_binary(&self.to_bytes())
            .expect("Failed to write pack index");
        file.path().to_path_buf()
    }
}
