// Start of file: /src/utils/mod.rs

/*
    * Cross-cutting request plumbing: error mapping, header proxying and
    * request logging.
*/

pub mod error_handler;
pub mod headers;
pub mod request_logger;

pub use error_handler::{map_error, AppError, ErrorResponse, ServiceError};
pub use headers::{HeaderSelector, ProxyHeaders};

// End of file: /src/utils/mod.rs
