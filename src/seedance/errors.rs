use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum SeedanceApiError {
    CreateTaskFailed,
    CreateTaskUnavailable,
    GetTaskFailed,
    InvalidTaskId,
    Unauthorized,
    TaskNotFound,
    TaskRejected(String),
    TaskFailed(String),
    NoVideoUrl,
    TimedOut,
}

impl SeedanceApiError {
    pub fn value(&self) -> ApiError {
        match self {
            Self::CreateTaskFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to create task.".to_string(),
            },
            Self::CreateTaskUnavailable => ApiError {
                code: StatusCode::SERVICE_UNAVAILABLE,
                message: "Failed to create task.".to_string(),
            },
            Self::GetTaskFailed => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to get task.".to_string(),
            },
            Self::InvalidTaskId => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Invalid task id.".to_string(),
            },
            Self::Unauthorized => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Seedance rejected the API key.".to_string(),
            },
            Self::TaskNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Task not found.".to_string(),
            },
            Self::TaskRejected(reason) => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: format!("Seedance rejected the task: {}", reason),
            },
            Self::TaskFailed(reason) => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: format!("Task failed: {}", reason),
            },
            Self::NoVideoUrl => ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "No video URL found in result.".to_string(),
            },
            Self::TimedOut => ApiError {
                code: StatusCode::GATEWAY_TIMEOUT,
                message: "Task failed or timed out.".to_string(),
            },
        }
    }
}
