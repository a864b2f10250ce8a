use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImgbbApiError {
    UploadFailed,
    UploadRejected(String),
}

impl ImgbbApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::UploadFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to upload image to ImgBB.".to_string(),
            },
            Self::UploadRejected(reason) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("ImgBB rejected the image: {}", reason),
            },
        }
    }
}
