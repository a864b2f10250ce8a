use axum::http::StatusCode;
use imagesize::ImageSize;

use crate::app::models::api_error::ApiError;

use super::file_properties::FileProperties;

#[derive(Debug)]
pub struct ImageFileProperties {
    pub file_properties: FileProperties,
    pub image_size: ImageSize,
}

impl ImageFileProperties {
    pub fn from_file_properties(file_properties: FileProperties) -> Result<Self, ApiError> {
        match imagesize::blob_size(&file_properties.data) {
            Ok(image_size) => Ok(Self {
                file_properties,
                image_size,
            }),
            Err(e) => {
                tracing::warn!(
                    "from_file_properties: {} is not a readable image: {:?}",
                    file_properties.field_name,
                    e
                );
                Err(ApiError {
                    code: StatusCode::BAD_REQUEST,
                    message: "Invalid image.".to_string(),
                })
            }
        }
    }
}
