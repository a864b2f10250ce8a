use std::time::Duration;

use crate::app::envy::Envy;

pub const API_URL: &str = "https://ark.cn-beijing.volces.com/api/v3/contents/generations/tasks";

#[derive(Debug, Clone)]
pub struct SeedanceConfig {
    pub api_url: String,
    pub api_key: String,
    pub poll_max_attempts: u32,
    pub poll_interval: Duration,
    pub create_task_retry_interval: Duration,
}

impl SeedanceConfig {
    pub fn from_envy(envy: &Envy, api_key: &str) -> Self {
        Self {
            api_url: envy.seedance_api_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            poll_max_attempts: envy.poll_max_attempts,
            poll_interval: Duration::from_millis(envy.poll_interval_millis),
            create_task_retry_interval: Duration::from_millis(envy.create_task_retry_millis),
        }
    }
}
