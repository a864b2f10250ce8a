use uuid::Uuid;

use crate::app::{
    models::api_error::ApiError,
    util::multipart::models::image_file_properties::ImageFileProperties,
};

use super::{errors::ImgbbApiError, structs::imgbb_upload_response::ImgbbUploadResponse};

/// Uploads the image and returns its public URL.
pub async fn upload_image(
    image: &ImageFileProperties,
    api_key: &str,
    api_url: &str,
    client: &reqwest::Client,
) -> Result<String, ApiError> {
    let payload = [
        ("key", api_key.to_string()),
        ("image", base64::encode(&image.file_properties.data)),
        ("name", format!("seedance_{}", Uuid::new_v4())),
    ];

    let result = client.post(api_url).form(&payload).send().await;

    match result {
        Ok(res) => {
            let status = res.status();

            match res.text().await {
                Ok(text) => match serde_json::from_str::<ImgbbUploadResponse>(&text) {
                    Ok(response) if status.is_success() => url_from_response(response),
                    Ok(response) => {
                        tracing::warn!("upload_image (1): {} {:?}", status, text);
                        match response.error.and_then(|e| e.message) {
                            Some(reason) => Err(ImgbbApiError::UploadRejected(reason).value()),
                            None => Err(ImgbbApiError::UploadFailed.value()),
                        }
                    }
                    Err(_) => {
                        tracing::warn!("upload_image (2): {} {:?}", status, text);
                        Err(ImgbbApiError::UploadFailed.value())
                    }
                },
                Err(e) => {
                    tracing::warn!("upload_image (3): {:?}", e);
                    Err(ImgbbApiError::UploadFailed.value())
                }
            }
        }
        Err(e) => {
            tracing::warn!("upload_image (4): {:?}", e);
            Err(ImgbbApiError::UploadFailed.value())
        }
    }
}

fn url_from_response(response: ImgbbUploadResponse) -> Result<String, ApiError> {
    if !response.success {
        let reason = response
            .error
            .and_then(|e| e.message)
            .unwrap_or("no reason given".to_string());
        tracing::error!("upload_image rejected: {}", reason);

        return Err(ImgbbApiError::UploadRejected(reason).value());
    }

    let Some(url) = response.data.and_then(|d| d.url) else {
        tracing::error!("upload_image succeeded without a url");
        return Err(ImgbbApiError::UploadFailed.value());
    };

    tracing::info!("image uploaded to ImgBB: {}", url);

    Ok(url)
}
