// Start of file: /src/utils/request_logger.rs

// * Logs the start and the end of every request together with the caller
// * identity taken from the platform headers. Health probes are skipped.

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header::HOST, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::config::{environment::PlatformHeaderKeys, state::AppState};

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Prefix of the probe routes, which are never logged.
pub const HEALTH_PATH_PREFIX: &str = "/-/";

// * Identity headers of one request, copied out so the request can move on
#[derive(Debug, Default, PartialEq, Eq)]
struct CallerIdentity {
    request_id: String,
    user_id: String,
    user_groups: String,
    client_type: String,
    is_backoffice: String,
    user_properties: String,
}

impl CallerIdentity {
    fn from_headers(headers: &HeaderMap, keys: &PlatformHeaderKeys) -> Self {
        let header = |name: &str| -> String {
            headers
                .get(name.to_ascii_lowercase().as_str())
                .and_then(|value| value.to_str().ok())
                .unwrap_or_default()
                .to_owned()
        };

        Self {
            request_id: header(REQUEST_ID_HEADER),
            user_id: header(&*keys.user_id),
            user_groups: header(&*keys.user_groups),
            client_type: header(&*keys.client_type),
            is_backoffice: header(&*keys.is_backoffice),
            user_properties: header(&*keys.user_properties),
        }
    }
}

/// Full URL of the request, `scheme://host:port/path?query`.
///
/// Server-side URIs are usually origin-form, so the authority falls back
/// to the `Host` header and the scheme to `http`.
fn request_url<B>(req: &Request<B>) -> String {
    let uri = req.uri();
    let scheme: &str = uri.scheme_str().unwrap_or("http");
    let host: &str = uri
        .authority()
        .map(|authority| authority.as_str())
        .or_else(|| req.headers().get(HOST).and_then(|value| value.to_str().ok()))
        .unwrap_or("");
    let path_and_query: &str = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    if host.is_empty() {
        path_and_query.to_owned()
    } else {
        format!("{scheme}://{host}{path_and_query}")
    }
}

/// Whether a request to `path` gets start/end log lines.
pub fn should_log(path: &str) -> bool {
    !path.starts_with(HEALTH_PATH_PREFIX)
}

pub async fn request_logger(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    if !should_log(req.uri().path()) {
        return next.run(req).await;
    }

    let start: Instant = Instant::now();
    let method: String = req.method().to_string();
    let url: String = request_url(&req);
    let identity: CallerIdentity =
        CallerIdentity::from_headers(req.headers(), &state.environment.platform_headers);

    info!(
        method = %method,
        url = %url,
        request_id = %identity.request_id,
        user_id = %identity.user_id,
        user_groups = %identity.user_groups,
        client_type = %identity.client_type,
        is_backoffice = %identity.is_backoffice,
        user_properties = %identity.user_properties,
        "[HTTP REQUEST - START] {method} - {url}"
    );

    let response: Response = next.run(req).await;

    let duration_ms: u128 = start.elapsed().as_millis();
    let status = response.status();

    info!(
        status = status.as_u16(),
        method = %method,
        url = %url,
        duration_ms = duration_ms as u64,
        request_id = %identity.request_id,
        user_id = %identity.user_id,
        user_groups = %identity.user_groups,
        client_type = %identity.client_type,
        is_backoffice = %identity.is_backoffice,
        user_properties = %identity.user_properties,
        "[HTTP REQUEST - END] {status}: {method} - {url}"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn probes_are_not_logged() {
        assert!(!should_log("/-/healthz"));
        assert!(!should_log("/-/ready"));
        assert!(should_log("/hello"));
        assert!(should_log("/documentation"));
    }

    #[test]
    fn identity_follows_configured_header_keys() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));
        headers.insert("x-user", HeaderValue::from_static("alice"));
        headers.insert("miausergroups", HeaderValue::from_static("admin"));

        let keys = PlatformHeaderKeys {
            user_id: "X-User".into(),
            ..PlatformHeaderKeys::default()
        };
        let identity = CallerIdentity::from_headers(&headers, &keys);

        assert_eq!(identity.request_id, "req-1");
        assert_eq!(identity.user_id, "alice");
        assert_eq!(identity.user_groups, "admin");
        assert_eq!(identity.client_type, "");
    }

    #[test]
    fn url_is_rebuilt_from_the_host_header() {
        let req = Request::builder()
            .uri("/hello?queryParam=x")
            .header(HOST, "localhost:3000")
            .body(())
            .unwrap();

        assert_eq!(request_url(&req), "http://localhost:3000/hello?queryParam=x");
    }

    #[test]
    fn absolute_uri_keeps_its_own_scheme_and_authority() {
        let req = Request::builder()
            .uri("https://api.example.com:8443/hello")
            .header(HOST, "ignored")
            .body(())
            .unwrap();

        assert_eq!(request_url(&req), "https://api.example.com:8443/hello");
    }

    #[test]
    fn url_without_host_is_the_path() {
        let req = Request::builder().uri("/-/healthz").body(()).unwrap();
        assert_eq!(request_url(&req), "/-/healthz");
    }
}

// End of file: /src/utils/request_logger.rs
