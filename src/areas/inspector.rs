use crate::areas::pack_index::PackIndex;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Entry point of the CLI commands
///
/// Owns the output sink so commands can be pointed at stdout or at an
/// in-memory buffer.
pub struct Inspector {
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Inspector {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        Inspector {
            writer: RefCell::new(writer),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub(crate) fn load(&self, path: &Path) -> anyhow::Result<PackIndex> {
        PackIndex::open(path)
            .with_context(|| format!("failed to load pack index at {:?}", path))
    }
}
