use std::path::{Path, PathBuf};

use crate::{
    app::{
        models::api_error::ApiError,
        util::multipart::models::{
            image_file_properties::ImageFileProperties, multipart_form::MultipartForm,
        },
    },
    imgbb,
    seedance::{self, config::SeedanceConfig},
    AppState,
};

use super::{
    dtos::generate_video_dto::GenerateVideoDto, errors::GenerationsApiError,
    models::generated_video::GeneratedVideo,
};

pub const FIRST_FRAME_FIELD: &str = "image";
pub const END_FRAME_FIELD: &str = "end_frame_image";

pub fn take_frames(
    form: &mut MultipartForm,
) -> Result<(ImageFileProperties, Option<ImageFileProperties>), ApiError> {
    let Some(first_frame) = form.take_file(FIRST_FRAME_FIELD) else {
        return Err(GenerationsApiError::MissingImage.value());
    };
    let first_frame = ImageFileProperties::from_file_properties(first_frame)?;

    let end_frame = match form.take_file(END_FRAME_FIELD) {
        Some(end_frame) => Some(ImageFileProperties::from_file_properties(end_frame)?),
        None => None,
    };

    Ok((first_frame, end_frame))
}

pub async fn generate_video(
    dto: &GenerateVideoDto,
    first_frame: &ImageFileProperties,
    end_frame: Option<&ImageFileProperties>,
    state: &AppState,
) -> Result<GeneratedVideo, ApiError> {
    // Both keys are checked before anything leaves the machine.
    let seedance_api_key = state.credentials.seedance_api_key()?;
    let imgbb_api_key = state.credentials.imgbb_api_key()?;

    let envy = &state.envy;
    let client = &state.client;

    if let Err(e) = tokio::fs::create_dir_all(&envy.output_dir).await {
        tracing::error!("generate_video: could not create {:?}: {}", envy.output_dir, e);
        return Err(GenerationsApiError::SaveFrameFailed.value());
    }

    save_frame(first_frame, "seedance_first_frame", &envy.output_dir).await?;
    let first_frame_url =
        imgbb::service::upload_image(first_frame, imgbb_api_key, &envy.imgbb_api_url, client)
            .await?;
    tracing::info!("first frame url: {}", first_frame_url);

    let end_frame_url = match end_frame {
        Some(end_frame) => {
            save_frame(end_frame, "seedance_end_frame", &envy.output_dir).await?;
            let url =
                imgbb::service::upload_image(end_frame, imgbb_api_key, &envy.imgbb_api_url, client)
                    .await?;
            tracing::info!("end frame url: {}", url);
            Some(url)
        }
        None => None,
    };

    let config = SeedanceConfig::from_envy(envy, seedance_api_key);
    let spec =
        seedance::service::provide_task_spec(dto, &first_frame_url, end_frame_url.as_deref());
    tracing::info!("sending request to Seedance: {}", seedance::service::format_prompt(dto));

    let task_id = seedance::service::create_task_with_retry(&spec, &config, client).await?;
    let video_url = seedance::service::await_task_completion(&task_id, &config, client).await?;
    let video_path =
        seedance::service::download_video(&video_url, &task_id, &envy.output_dir, client).await?;

    Ok(GeneratedVideo {
        task_id,
        model: dto.model.to_string(),
        video_path: video_path.display().to_string(),
        video_url,
        first_frame_url,
        end_frame_url,
    })
}

async fn save_frame(
    image: &ImageFileProperties,
    prefix: &str,
    output_dir: &Path,
) -> Result<PathBuf, ApiError> {
    let file_properties = &image.file_properties;
    let path = output_dir.join(format!(
        "{}_{}.{}",
        prefix,
        file_properties.id,
        file_properties.extension()
    ));

    match tokio::fs::write(&path, &file_properties.data).await {
        Ok(_) => {
            tracing::debug!(
                "saved {} ({}x{}) to {:?}",
                file_properties.file_name,
                image.image_size.width,
                image.image_size.height,
                path
            );
            Ok(path)
        }
        Err(e) => {
            tracing::error!("save_frame: could not write {:?}: {}", path, e);
            Err(GenerationsApiError::SaveFrameFailed.value())
        }
    }
}
