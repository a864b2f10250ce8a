use bytes::Bytes;
use mime::Mime;

#[derive(Debug, Clone)]
pub struct FileProperties {
    pub id: String,
    pub field_name: String,
    pub file_name: String,
    pub mime_type: Mime,
    pub data: Bytes,
}

impl FileProperties {
    pub fn extension(&self) -> &'static str {
        if self.mime_type.type_() != mime::IMAGE {
            return "png";
        }

        match self.mime_type.subtype().as_str() {
            "jpeg" => "jpg",
            "gif" => "gif",
            "bmp" => "bmp",
            "webp" => "webp",
            _ => "png",
        }
    }
}
