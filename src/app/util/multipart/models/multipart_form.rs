use std::collections::HashMap;

use super::file_properties::FileProperties;

#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub files: Vec<FileProperties>,
}

impl MultipartForm {
    /// Removes the named file. Empty file parts count as absent, which is what
    /// browsers send for an unset file input.
    pub fn take_file(&mut self, field_name: &str) -> Option<FileProperties> {
        let index = self
            .files
            .iter()
            .position(|f| f.field_name == field_name && !f.data.is_empty())?;

        Some(self.files.remove(index))
    }
}
