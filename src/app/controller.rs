use axum::Json;
use serde_json::{json, Value};

use super::models::api_error::ApiError;

pub async fn get_root() -> Result<Json<Value>, ApiError> {
    Ok(Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    })))
}
