#![allow(dead_code)]

pub mod command;
pub mod pack_builder;

use assert_fs::TempDir;
use packidx::ObjectId;
use rstest::fixture;
use std::path::PathBuf;

/// Index of a pack holding one commit, one tree and one blob
pub const FIXTURE_PACK_INDEX: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/pack.idx");

/// Objects of the fixture index with their pack offsets
pub const FIXTURE_OBJECTS: [(&str, u64); 3] = [
    ("aa763b87e9737787f9341fc4ced04dffc16c6490", 12),
    ("ba4fcdffc2882b2eaad6d56f2bc208e085a31f12", 130),
    ("065a7ba193a6fbc6c184eb5fcf5e0876c5569f5f", 156),
];

#[fixture]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(FIXTURE_PACK_INDEX)
}

#[fixture]
pub fn index_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn oid(hex: &str) -> ObjectId {
    ObjectId::try_parse(hex).expect("Invalid object ID in test")
}

/// Object ID whose first and last bytes are set, all others zero
pub fn oid_with(first: u8, last: u8) -> ObjectId {
    let mut bytes = [0u8; 20];
    bytes[0] = first;
    bytes[19] = last;
    ObjectId::from_bytes(bytes)
}
