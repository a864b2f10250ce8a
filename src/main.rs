use std::{env, net::SocketAddr};

use seedance_node::{app::envy::Envy, credentials, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("seedance_node=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // credentials
    let credentials = credentials::service::load_credentials(&envy.credentials_dir);
    tracing::debug!("{:?}", credentials);

    // output
    if let Err(e) = tokio::fs::create_dir_all(&envy.output_dir).await {
        panic!("failed to create output dir {:?}: {}", envy.output_dir, e);
    }
    tracing::info!("saving videos to {:?}", envy.output_dir);

    // properties
    let port = envy.port.to_owned().unwrap_or(8189);
    let state = match AppState::new(envy, credentials) {
        Ok(state) => state,
        Err(e) => panic!("failed to build http client: {}", e),
    };

    // app
    let app = seedance_node::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
