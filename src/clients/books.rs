// Start of file: /src/clients/books.rs

// * Outbound client for the books CRUD service.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use axum::http::HeaderMap;
use reqwest::{Client, StatusCode};
use tracing::info;

use crate::config::environment::{EnvironmentVariables, HttpLogLevel};
use crate::utils::headers::{to_header_map, ProxyHeaders};

/// Path of the book listing on the CRUD service.
pub const BOOKS_PATH: &str = "/v2/books";

#[derive(Debug, thiserror::Error)]
pub enum BooksError {
    #[error("books request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("books service answered with status {0}")]
    Status(StatusCode),
    #[error("books response is not a list of strings: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetches the list of book identifiers, forwarding the given headers.
#[async_trait]
pub trait BooksClient: Send + Sync {
    async fn get_books(&self, headers: &ProxyHeaders) -> Result<Vec<String>, BooksError>;
}

/// [`BooksClient`] talking HTTP to the CRUD service.
#[derive(Clone, Debug)]
pub struct HttpBooksClient {
    http: Client,
    books_url: String,
    log_level: HttpLogLevel,
}

impl HttpBooksClient {
    /// Builds a client whose connect, read and whole-call timeouts all equal `timeout`.
    pub fn new(base_url: &str, timeout: Duration, log_level: HttpLogLevel) -> Result<Self, BooksError> {
        let http: Client = Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            books_url: format!("{}{}", base_url.trim_end_matches('/'), BOOKS_PATH),
            log_level,
        })
    }

    pub fn from_env(env: &EnvironmentVariables) -> Result<Self, BooksError> {
        Self::new(
            &env.crud_url,
            Duration::from_secs(env.downstream_timeout_seconds),
            env.http_log_level,
        )
    }

    pub fn books_url(&self) -> &str {
        &self.books_url
    }
}

#[async_trait]
impl BooksClient for HttpBooksClient {
    async fn get_books(&self, headers: &ProxyHeaders) -> Result<Vec<String>, BooksError> {
        let outbound: HeaderMap = to_header_map(headers);
        let started: Instant = Instant::now();

        if self.log_level >= HttpLogLevel::Headers {
            info!(url = %self.books_url, headers = ?outbound, "--> GET {}", self.books_url);
        } else if self.log_level >= HttpLogLevel::Basic {
            info!(url = %self.books_url, "--> GET {}", self.books_url);
        }

        let response = self.http.get(&self.books_url).headers(outbound).send().await?;
        let status: StatusCode = response.status();
        let body = response.bytes().await?;

        let elapsed_ms: u64 = started.elapsed().as_millis() as u64;
        match self.log_level {
            HttpLogLevel::None => {}
            HttpLogLevel::Basic | HttpLogLevel::Headers => {
                info!(status = status.as_u16(), elapsed_ms, "<-- {} {}", status, self.books_url);
            }
            HttpLogLevel::Body => {
                info!(
                    status = status.as_u16(),
                    elapsed_ms,
                    body = %String::from_utf8_lossy(&body),
                    "<-- {} {}", status, self.books_url
                );
            }
        }

        if !status.is_success() {
            return Err(BooksError::Status(status));
        }

        Ok(serde_json::from_slice(&body)?)
    }
}


// End of file: /src/clients/books.rs
