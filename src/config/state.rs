// Application state shared by every handler

use std::sync::Arc;

use anyhow::Context;

use crate::api::health::models::HealthStatus;
use crate::clients::books::{BooksClient, HttpBooksClient};
use crate::config::environment::EnvironmentVariables;
use crate::utils::headers::HeaderSelector;

/// Everything here is built once at start-up and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub header_selector: Arc<HeaderSelector>,
    pub books: Arc<dyn BooksClient>,
    pub health: Arc<HealthStatus>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.environment)
            .field("header_selector", &self.header_selector)
            .field("health", &self.health)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Builds the state with the HTTP books client described by `environment`.
    pub fn new(environment: EnvironmentVariables) -> anyhow::Result<Self> {
        let books: HttpBooksClient = HttpBooksClient::from_env(&environment)
            .context("Failed to build the books client")?;

        tracing::info!(
            books_url = books.books_url(),
            http_log_level = %environment.http_log_level,
            "Books client configured"
        );

        Ok(Self::with_books_client(environment, Arc::new(books)))
    }

    /// Builds the state around an already constructed books client.
    pub fn with_books_client(environment: EnvironmentVariables, books: Arc<dyn BooksClient>) -> Self {
        let header_selector: HeaderSelector =
            HeaderSelector::from_delimited(&environment.additional_headers_to_proxy);

        Self {
            environment: Arc::new(environment),
            header_selector: Arc::new(header_selector),
            books,
            health: Arc::new(HealthStatus::current()),
        }
    }
}
