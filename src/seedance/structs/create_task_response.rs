use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateTaskResponse {
    pub id: Option<String>,
}
