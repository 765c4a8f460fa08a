// Start of file: /src/core/server.rs

// Application server configuration and setup

use std::time::Duration;

use anyhow::Result;
use axum::{
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    Router,
};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::{error, info};

use crate::api::{
    documentation::routes::documentation_routes, health::routes::health_routes,
    hello::routes::hello_routes,
};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::utils::{
    error_handler::{handle_global_error, handle_panic, method_not_allowed, route_not_found},
    request_logger::request_logger,
};

/// Creates the application router with every route and middleware layer.
///
/// Layers run outermost first: panics are caught before anything else sees
/// them, then the request is logged, then body size and timeout failures
/// are turned into error responses.
pub fn create_app(state: AppState) -> Router {
    let request_timeout: Duration = Duration::from_secs(state.environment.default_timeout_seconds);
    let body_limit: usize = state.environment.max_request_body_size;

    Router::new()
        .merge(hello_routes())
        .merge(health_routes())
        .merge(documentation_routes())
        // Add new routes here
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(from_fn_with_state(state.clone(), request_logger))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(request_timeout))
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .with_state(state)
}

/// Takes the TCP listener handed over by `listenfd`, or binds HOST:PORT.
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Resolves on Ctrl+C or TERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(err) => {
                error!("Failed to listen for TERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}

// End of file: /src/core/server.rs
