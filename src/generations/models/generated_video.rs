use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedVideo {
    pub task_id: String,
    pub model: String,
    pub video_path: String,
    pub video_url: String,
    pub first_frame_url: String,
    pub end_frame_url: Option<String>,
}
