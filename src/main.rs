// Start of file: src/main.rs

use anyhow::Context;
use axum::serve;
use tokio::net::TcpListener;
use tracing::info;

use service_api::{
    config::{environment::EnvironmentVariables, state::AppState},
    core::{
        logging::init_tracing,
        server::{create_app, setup_listener, shutdown_signal},
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ! Tracing first, so warnings raised while reading the configuration are kept
    EnvironmentVariables::load_dotenv();
    init_tracing();

    let env: EnvironmentVariables =
        EnvironmentVariables::load().context("Failed to load environment variables")?;
    info!(environment = %env.environment, "Starting service");

    let listener: TcpListener = setup_listener(&env).await?;
    let state: AppState = AppState::new(env)?;
    let app = create_app(state);

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
