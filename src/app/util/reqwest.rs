use std::{
    fmt::Display,
    path::{Path, PathBuf},
};

use bytes::Bytes;
use futures::{Stream, StreamExt};
use reqwest::StatusCode;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::app::models::api_error::ApiError;

/// Streams the body at `url` into `path`, returning the number of bytes written.
pub async fn download_to_file(
    url: &str,
    path: &Path,
    client: &reqwest::Client,
) -> Result<u64, ApiError> {
    let res = match client.get(url).send().await {
        Ok(res) => res,
        Err(e) => {
            tracing::error!(%e);
            return Err(ApiError {
                code: StatusCode::BAD_GATEWAY,
                message: "Failed to get url response.".to_string(),
            });
        }
    };

    if !res.status().is_success() {
        tracing::error!("download_to_file: {} responded {}", url, res.status());
        return Err(ApiError {
            code: StatusCode::BAD_GATEWAY,
            message: format!("Download failed with status {}.", res.status()),
        });
    }

    write_stream(Box::pin(res.bytes_stream()), path).await
}

/// Writes the stream to `<path>.part` and moves it to `path` once complete.
/// Nothing is left behind on failure.
pub async fn write_stream<S, E>(stream: S, path: &Path) -> Result<u64, ApiError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    let part_path = part_path(path);

    match write_part(stream, &part_path).await {
        Ok(written) => match tokio::fs::rename(&part_path, path).await {
            Ok(_) => Ok(written),
            Err(e) => {
                tracing::error!(
                    "write_stream: could not move {:?} to {:?}: {}",
                    part_path,
                    path,
                    e
                );
                remove_part(&part_path).await;
                Err(ApiError {
                    code: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Failed to write output file.".to_string(),
                })
            }
        },
        Err(e) => {
            remove_part(&part_path).await;
            Err(e)
        }
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut part = path.as_os_str().to_owned();
    part.push(".part");
    PathBuf::from(part)
}

async fn remove_part(part_path: &Path) {
    if let Err(e) = tokio::fs::remove_file(part_path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::warn!("could not remove {:?}: {}", part_path, e);
        }
    }
}

async fn write_part<S, E>(mut stream: S, part_path: &Path) -> Result<u64, ApiError>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    let mut file = match File::create(part_path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::error!("download_to_file: could not create {:?}: {}", part_path, e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to create output file.".to_string(),
            });
        }
    };

    let mut written: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::error!(%e);
                return Err(ApiError {
                    code: StatusCode::BAD_GATEWAY,
                    message: "Failed to get bytes from response.".to_string(),
                });
            }
        };

        if let Err(e) = file.write_all(&chunk).await {
            tracing::error!("download_to_file: write to {:?} failed: {}", part_path, e);
            return Err(ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Failed to write output file.".to_string(),
            });
        }

        written += chunk.len() as u64;
    }

    if let Err(e) = file.flush().await {
        tracing::error!("download_to_file: flush of {:?} failed: {}", part_path, e);
        return Err(ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to write output file.".to_string(),
        });
    }

    Ok(written)
}
