use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum GenerationsApiError {
    MissingImage,
    InvalidField(&'static str),
    SaveFrameFailed,
}

impl GenerationsApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::MissingImage => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "image is required.".to_string(),
            },
            Self::InvalidField(field) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("{} is invalid.", field),
            },
            Self::SaveFrameFailed => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to save input image.".to_string(),
            },
        }
    }
}
