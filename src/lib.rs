use std::{sync::Arc, time::Duration};

use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    BoxError, Router,
};
use tower::{buffer::BufferLayer, limit::RateLimitLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

use crate::{
    app::{envy::Envy, errors::DefaultApiError},
    credentials::models::credentials::Credentials,
};

pub mod app;
pub mod credentials;
pub mod generations;
pub mod imgbb;
pub mod seedance;

// ImgBB rejects files above 32 MB; two frames plus form fields fit under this.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub envy: Arc<Envy>,
    pub credentials: Arc<Credentials>,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new(envy: Envy, credentials: Credentials) -> Result<Self, reqwest::Error> {
        // A hung upstream must not outlive the poll budget.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(envy.http_timeout_secs))
            .build()?;

        Ok(Self {
            envy: Arc::new(envy),
            credentials: Arc::new(credentials),
            client,
        })
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST]);

    Router::new()
        .route("/", get(app::controller::get_root))
        // generations
        .route("/generations", post(generations::controller::generate_video))
        .route(
            "/generations/options",
            get(generations::controller::get_generation_options),
        )
        .route("/tasks/:id", get(generations::controller::get_task_by_id))
        // layers
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|err: BoxError| async move {
                    tracing::error!("unhandled service error: {}", err);
                    DefaultApiError::InternalServerError.value()
                }))
                .layer(BufferLayer::new(1024))
                .layer(RateLimitLayer::new(5, Duration::from_secs(1))),
        )
        .with_state(state)
}
