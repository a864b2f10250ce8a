use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImgbbUploadResponse {
    #[serde(default)]
    pub success: bool,
    pub status: Option<u16>,
    pub data: Option<ImgbbImage>,
    pub error: Option<ImgbbError>,
}

#[derive(Debug, Deserialize)]
pub struct ImgbbImage {
    pub id: Option<String>,
    pub url: Option<String>,
    pub display_url: Option<String>,
    pub delete_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ImgbbError {
    pub message: Option<String>,
    pub code: Option<i64>,
}
