use crate::areas::inspector::Inspector;
use std::io::Write;
use std::path::Path;

impl Inspector {
    pub fn show_index(&self, path: &Path) -> anyhow::Result<()> {
        let index = self.load(path)?;

        for entry in index.entries() {
            writeln!(self.writer(), "{}", entry?)?;
        }

        Ok(())
    }
}
