//! Health payload shared by every probe.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name reported by the probes.
pub const SERVICE_NAME: &str = "service-api";

/// Status reported while the process is up.
pub const STATUS_OK: &str = "OK";

/// Probe response body. Built once at start-up and reused for every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "service-api")]
    pub name: String,
    #[schema(example = "0.1.0")]
    pub version: String,
    #[schema(example = "OK")]
    pub status: String,
}

impl HealthStatus {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            status: STATUS_OK.to_string(),
        }
    }

    /// Status of this build, versioned from the crate version.
    pub fn current() -> Self {
        Self::new(SERVICE_NAME, env!("CARGO_PKG_VERSION"))
    }
}
