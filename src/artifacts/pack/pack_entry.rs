use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// An object of the pack together with its resolved pack file offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct PackIndexEntry {
    pub oid: ObjectId,
    pub offset: u64,
}

impl std::fmt::Display for PackIndexEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.offset, self.oid)
    }
}
