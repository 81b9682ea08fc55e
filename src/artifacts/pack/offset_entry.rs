use crate::artifacts::pack::LARGE_OFFSET_FLAG;

/// Decoded entry of the 32-bit offset table
///
/// Offsets below 2GB are stored directly. When the most significant bit is
/// set, the remaining 31 bits index the 64-bit large offset table instead.
/// Bit 15 carries no special meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetEntry {
    Direct(u32),
    Large(u32),
}

impl OffsetEntry {
    pub fn from_raw(raw: u32) -> Self {
        if raw & LARGE_OFFSET_FLAG != 0 {
            OffsetEntry::Large(raw & !LARGE_OFFSET_FLAG)
        } else {
            OffsetEntry::Direct(raw)
        }
    }

    pub fn is_large(&self) -> bool {
        matches!(self, OffsetEntry::Large(_))
    }
}
