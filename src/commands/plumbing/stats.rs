use crate::areas::inspector::Inspector;
use std::io::Write;
use std::path::Path;

impl Inspector {
    pub fn stats(&self, path: &Path) -> anyhow::Result<()> {
        let index = self.load(path)?;

        let mut writer = self.writer();
        writeln!(writer, "version: {}", index.version())?;
        writeln!(writer, "objects: {}", index.len())?;
        writeln!(writer, "large offsets: {}", index.large_offset_count())?;

        Ok(())
    }
}
