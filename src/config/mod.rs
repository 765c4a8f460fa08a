// Start of file: /src/config/mod.rs

/*
* Process configuration: environment variables loaded at start-up and the
* shared application state built from them.
*/

pub mod environment;
pub mod state;

pub use environment::{EnvironmentVariables, HttpLogLevel, PlatformHeaderKeys};
pub use state::AppState;

// End of file: /src/config/mod.rs
