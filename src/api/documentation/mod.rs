// Start of file: /src/api/documentation/mod.rs

pub mod handler;
pub mod routes;

// End of file: /src/api/documentation/mod.rs
