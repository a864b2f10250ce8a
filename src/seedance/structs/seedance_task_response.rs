use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedanceTaskResponse {
    pub id: String,
    pub model: Option<String>,
    pub status: String,
    pub content: Option<SeedanceTaskContent>,
    pub error: Option<SeedanceTaskError>,
    pub failure_reason: Option<String>,
    pub progress: Option<f64>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedanceTaskContent {
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedanceTaskError {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl SeedanceTaskResponse {
    pub fn video_url(&self) -> Option<&str> {
        self.content.as_ref()?.video_url.as_deref()
    }

    pub fn failure_message(&self) -> String {
        if let Some(reason) = &self.failure_reason {
            return reason.to_string();
        }

        match &self.error {
            Some(SeedanceTaskError {
                message: Some(message),
                code,
            }) => match code {
                Some(code) => format!("{}: {}", code, message),
                None => message.to_string(),
            },
            _ => "no failure reason given".to_string(),
        }
    }
}
