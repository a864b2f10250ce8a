use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use tokio::time::sleep;
use tokio_retry::{strategy::FixedInterval, RetryIf};

use crate::{
    app::{models::api_error::ApiError, util},
    generations::dtos::generate_video_dto::GenerateVideoDto,
};

use super::{
    config::SeedanceConfig,
    enums::{seedance_duration::SeedanceDuration, seedance_task_status::SeedanceTaskStatus},
    errors::SeedanceApiError,
    models::create_task_spec::{ContentItem, CreateTaskSpec},
    structs::{
        create_task_response::CreateTaskResponse, seedance_error_response::SeedanceErrorResponse,
        seedance_task_response::SeedanceTaskResponse,
    },
};

/// Generation parameters travel as flags appended to the text prompt.
pub fn format_prompt(dto: &GenerateVideoDto) -> String {
    let seed = match dto.seed >= 0 {
        true => format!("--seed {}", dto.seed),
        false => String::new(),
    };

    format!(
        "{} --resolution {} --duration {} --camerafixed {} {}",
        dto.prompt,
        dto.resolution,
        SeedanceDuration::seconds(&dto.duration),
        dto.camera_fixed,
        seed
    )
    .trim()
    .to_string()
}

pub fn provide_task_spec(
    dto: &GenerateVideoDto,
    first_frame_url: &str,
    end_frame_url: Option<&str>,
) -> CreateTaskSpec {
    let mut content = vec![
        ContentItem::Text {
            text: format_prompt(dto),
        },
        ContentItem::image_url(first_frame_url),
    ];

    if let Some(url) = end_frame_url {
        content.push(ContentItem::image_url(url));
    }

    CreateTaskSpec {
        model: dto.model.to_string(),
        content,
    }
}

pub async fn create_task_with_retry(
    spec: &CreateTaskSpec,
    config: &SeedanceConfig,
    client: &reqwest::Client,
) -> Result<String, ApiError> {
    let retry_strategy = FixedInterval::new(config.create_task_retry_interval).take(3);

    // Only an unreachable or 5xx upstream is retried.
    RetryIf::start(
        retry_strategy,
        || async { create_task(spec, config, client).await },
        |e: &ApiError| e.code == StatusCode::SERVICE_UNAVAILABLE,
    )
    .await
}

pub async fn create_task(
    spec: &CreateTaskSpec,
    config: &SeedanceConfig,
    client: &reqwest::Client,
) -> Result<String, ApiError> {
    let result = client
        .post(&config.api_url)
        .bearer_auth(&config.api_key)
        .json(spec)
        .send()
        .await;

    match result {
        Ok(res) => {
            let status = res.status();

            match res.text().await {
                Ok(text) => {
                    if !status.is_success() {
                        tracing::warn!("create_task (1): {} {:?}", status, text);
                        return Err(error_from_status(
                            status,
                            &text,
                            SeedanceApiError::CreateTaskUnavailable,
                        ));
                    }

                    match serde_json::from_str::<CreateTaskResponse>(&text) {
                        Ok(CreateTaskResponse { id: Some(id) }) => {
                            tracing::info!("task created with id {}", id);
                            Ok(id)
                        }
                        _ => {
                            tracing::warn!("create_task (2): no task id in {:?}", text);
                            Err(SeedanceApiError::CreateTaskFailed.value())
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("create_task (3): {:?}", e);
                    Err(SeedanceApiError::CreateTaskUnavailable.value())
                }
            }
        }
        Err(e) => {
            tracing::warn!("create_task (4): {:?}", e);
            Err(SeedanceApiError::CreateTaskUnavailable.value())
        }
    }
}

pub async fn get_task_by_id(
    id: &str,
    config: &SeedanceConfig,
    client: &reqwest::Client,
) -> Result<SeedanceTaskResponse, ApiError> {
    if !is_valid_task_id(id) {
        tracing::warn!("get_task_by_id: refusing task id {:?}", id);
        return Err(SeedanceApiError::InvalidTaskId.value());
    }

    let url = format!("{}/{}", config.api_url, id);
    let result = client.get(url).bearer_auth(&config.api_key).send().await;

    match result {
        Ok(res) => {
            let status = res.status();

            match res.text().await {
                Ok(text) => {
                    if !status.is_success() {
                        tracing::warn!("get_task_by_id (1): {} {:?}", status, text);
                        return Err(error_from_status(
                            status,
                            &text,
                            SeedanceApiError::GetTaskFailed,
                        ));
                    }

                    match serde_json::from_str(&text) {
                        Ok(task) => Ok(task),
                        Err(_) => {
                            tracing::warn!("get_task_by_id (2): {:?}", text);
                            Err(SeedanceApiError::GetTaskFailed.value())
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("get_task_by_id (3): {:?}", e);
                    Err(SeedanceApiError::GetTaskFailed.value())
                }
            }
        }
        Err(e) => {
            tracing::warn!("get_task_by_id (4): {:?}", e);
            Err(SeedanceApiError::GetTaskFailed.value())
        }
    }
}

/// Polls the task until it settles and returns the video URL.
///
/// Transient failures while polling are logged and the loop keeps going. A
/// rejected key or an unknown task ends it early.
pub async fn await_task_completion(
    id: &str,
    config: &SeedanceConfig,
    client: &reqwest::Client,
) -> Result<String, ApiError> {
    if !is_valid_task_id(id) {
        tracing::error!("await_task_completion: refusing task id {:?}", id);
        return Err(SeedanceApiError::InvalidTaskId.value());
    }

    tracing::info!(
        "polling task {} up to {} times every {:?}",
        id,
        config.poll_max_attempts,
        config.poll_interval
    );

    let mut last_status: Option<SeedanceTaskStatus> = None;

    for attempt in 1..=config.poll_max_attempts {
        match get_task_by_id(id, config, client).await {
            Ok(task) => {
                let status = SeedanceTaskStatus::from_value(&task.status);

                if last_status != Some(status) {
                    tracing::info!(
                        "task {} is {} (progress: {:?})",
                        id,
                        task.status,
                        task.progress
                    );
                } else {
                    tracing::debug!(
                        "task {} still {} after attempt {} (progress: {:?})",
                        id,
                        task.status,
                        attempt,
                        task.progress
                    );
                }
                last_status = Some(status);

                match status {
                    SeedanceTaskStatus::Succeeded => {
                        let Some(url) = task.video_url() else {
                            tracing::error!("task {} succeeded without a video url: {:?}", id, task);
                            return Err(SeedanceApiError::NoVideoUrl.value());
                        };

                        return Ok(url.to_string());
                    }
                    SeedanceTaskStatus::Failed | SeedanceTaskStatus::Cancelled => {
                        let reason = task.failure_message();
                        tracing::error!("task {} {}: {}", id, task.status, reason);

                        return Err(SeedanceApiError::TaskFailed(reason).value());
                    }
                    status if status.is_in_progress() => {}
                    _ => {
                        tracing::warn!("task {} has unknown status {:?}", id, task.status);
                    }
                }
            }
            Err(e) if e.code == StatusCode::UNAUTHORIZED || e.code == StatusCode::NOT_FOUND => {
                return Err(e);
            }
            Err(e) => {
                tracing::warn!("polling task {} failed on attempt {}: {}", id, attempt, e.message);
            }
        }

        if attempt < config.poll_max_attempts {
            sleep(config.poll_interval).await;
        }
    }

    tracing::error!(
        "task {} did not finish after {} attempts, check the API key or try again later",
        id,
        config.poll_max_attempts
    );

    Err(SeedanceApiError::TimedOut.value())
}

pub async fn download_video(
    url: &str,
    task_id: &str,
    output_dir: &Path,
    client: &reqwest::Client,
) -> Result<PathBuf, ApiError> {
    let path = output_dir.join(format!("seedance_output_{}.mp4", task_id));
    let preview: String = url.chars().take(100).collect();
    tracing::info!("downloading video {}", preview);

    let bytes = util::reqwest::download_to_file(url, &path, client).await?;
    tracing::info!("saved {} bytes to {:?}", bytes, path);

    Ok(path)
}

/// Task ids are pasted into the request path, so only `[A-Za-z0-9_-]` is allowed.
pub fn is_valid_task_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn error_from_status(status: StatusCode, text: &str, fallback: SeedanceApiError) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => SeedanceApiError::Unauthorized.value(),
        StatusCode::NOT_FOUND => SeedanceApiError::TaskNotFound.value(),
        s if s.is_client_error() => {
            let reason = serde_json::from_str::<SeedanceErrorResponse>(text)
                .ok()
                .and_then(|r| r.error)
                .and_then(|e| e.message)
                .unwrap_or(s.to_string());

            SeedanceApiError::TaskRejected(reason).value()
        }
        _ => fallback.value(),
    }
}
