//! tests/common/mod.rs
//! Shared helpers to spawn the app on an ephemeral port with a stubbed
//! books service.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::{serve, Router};
use tokio::net::TcpListener;

use service_api::clients::books::{BooksClient, BooksError};
use service_api::config::{environment::EnvironmentVariables, state::AppState};
use service_api::core::server::create_app;
use service_api::utils::headers::ProxyHeaders;

/// What the stub books service does when called.
#[derive(Clone, Debug)]
pub enum StubBehavior {
    Books(Vec<String>),
    Fail,
    Sleep(Duration),
    Panic,
}

/// In-memory books service that records the headers it was called with.
#[derive(Clone, Debug)]
pub struct StubBooks {
    behavior: StubBehavior,
    seen: Arc<Mutex<Vec<ProxyHeaders>>>,
}

impl StubBooks {
    pub fn new(behavior: StubBehavior) -> Self {
        Self {
            behavior,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn returning(books: &[&str]) -> Self {
        Self::new(StubBehavior::Books(books.iter().map(|b| b.to_string()).collect()))
    }

    /// Header sets received so far, in call order.
    pub fn calls(&self) -> Vec<ProxyHeaders> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl BooksClient for StubBooks {
    async fn get_books(&self, headers: &ProxyHeaders) -> Result<Vec<String>, BooksError> {
        self.seen.lock().unwrap().push(headers.clone());

        match &self.behavior {
            StubBehavior::Books(books) => Ok(books.clone()),
            StubBehavior::Fail => Err(BooksError::Status(StatusCode::INTERNAL_SERVER_ERROR)),
            StubBehavior::Sleep(duration) => {
                tokio::time::sleep(*duration).await;
                Ok(Vec::new())
            }
            StubBehavior::Panic => panic!("books stub exploded"),
        }
    }
}

/// Spawns the app with default configuration and the given books stub.
pub async fn spawn_app(books: StubBooks) -> String {
    spawn_app_with(EnvironmentVariables::default(), Arc::new(books)).await
}

/// Spawns the app on a random unused port and returns its base URL.
pub async fn spawn_app_with(env: EnvironmentVariables, books: Arc<dyn BooksClient>) -> String {
    let state: AppState = AppState::with_books_client(env, books);
    let app: Router = create_app(state);

    spawn_router(app).await
}

/// Serves any router on a random port, e.g. a fake CRUD service.
pub async fn spawn_router(router: Router) -> String {
    let listener: TcpListener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, router).await.expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
