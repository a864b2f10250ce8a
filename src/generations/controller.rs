use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    app::{models::api_error::ApiError, util::multipart::multipart},
    seedance::{self, config::SeedanceConfig, structs::seedance_task_response::SeedanceTaskResponse},
    AppState,
};

use super::{
    dtos::generate_video_dto::GenerateVideoDto,
    models::{generated_video::GeneratedVideo, generation_options::GenerationOptions},
    service,
};

pub async fn generate_video(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<GeneratedVideo>, ApiError> {
    let mut form = multipart::get_form(multipart).await?;
    let dto = GenerateVideoDto::from_fields(&form.fields)?.sanitized();

    match dto.validate() {
        Ok(_) => {
            let (first_frame, end_frame) = service::take_frames(&mut form)?;

            match service::generate_video(&dto, &first_frame, end_frame.as_ref(), &state).await {
                Ok(video) => Ok(Json(video)),
                Err(e) => Err(e),
            }
        }
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}

pub async fn get_generation_options() -> Json<GenerationOptions> {
    Json(GenerationOptions::new())
}

pub async fn get_task_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SeedanceTaskResponse>, ApiError> {
    let api_key = state.credentials.seedance_api_key()?;
    let config = SeedanceConfig::from_envy(&state.envy, api_key);

    match seedance::service::get_task_by_id(&id, &config, &state.client).await {
        Ok(task) => Ok(Json(task)),
        Err(e) => Err(e),
    }
}
