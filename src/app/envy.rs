use std::path::PathBuf;

use serde::Deserialize;

use crate::{imgbb, seedance};

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    #[serde(default = "default_credentials_dir")]
    pub credentials_dir: PathBuf,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_seedance_api_url")]
    pub seedance_api_url: String,
    #[serde(default = "default_imgbb_api_url")]
    pub imgbb_api_url: String,

    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,
    #[serde(default = "default_poll_interval_millis")]
    pub poll_interval_millis: u64,
    #[serde(default = "default_create_task_retry_millis")]
    pub create_task_retry_millis: u64,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

impl Default for Envy {
    fn default() -> Self {
        Self {
            app_env: default_app_env(),
            port: None,
            credentials_dir: default_credentials_dir(),
            output_dir: default_output_dir(),
            seedance_api_url: default_seedance_api_url(),
            imgbb_api_url: default_imgbb_api_url(),
            poll_max_attempts: default_poll_max_attempts(),
            poll_interval_millis: default_poll_interval_millis(),
            create_task_retry_millis: default_create_task_retry_millis(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

fn default_credentials_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output").join("seedance")
}

fn default_seedance_api_url() -> String {
    seedance::config::API_URL.to_string()
}

fn default_imgbb_api_url() -> String {
    imgbb::config::API_URL.to_string()
}

fn default_poll_max_attempts() -> u32 {
    60
}

fn default_poll_interval_millis() -> u64 {
    5000
}

fn default_create_task_retry_millis() -> u64 {
    10000
}

// Covers one whole request, including a video download.
fn default_http_timeout_secs() -> u64 {
    300
}
