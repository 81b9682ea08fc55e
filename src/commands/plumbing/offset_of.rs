use crate::areas::inspector::Inspector;
use crate::artifacts::objects::object_id::ObjectId;
use std::io::Write;
use std::path::Path;

impl Inspector {
    pub fn offset_of(&self, path: &Path, object_id: &str) -> anyhow::Result<()> {
        let object_id = ObjectId::try_parse(object_id)?;
        let index = self.load(path)?;

        let offset = index.offset_of(&object_id)?;
        writeln!(self.writer(), "{offset}")?;

        Ok(())
    }
}
