use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum CredentialsApiError {
    MissingSeedanceKey,
    MissingImgbbKey,
}

impl CredentialsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::MissingSeedanceKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to load API key.".to_string(),
            },
            Self::MissingImgbbKey => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to load ImgBB API key.".to_string(),
            },
        }
    }
}
