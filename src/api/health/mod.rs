// Start of file: /src/api/health/mod.rs

// * Liveness, readiness and check-up probes

pub mod handler;
pub mod models;
pub mod routes;

// End of file: /src/api/health/mod.rs
