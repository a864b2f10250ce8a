use serde::Deserialize;

use super::seedance_task_response::SeedanceTaskError;

#[derive(Debug, Deserialize)]
pub struct SeedanceErrorResponse {
    pub error: Option<SeedanceTaskError>,
}
