// Start of file: /src/api/mod.rs

/*
    * HTTP surface of the service. Each feature owns its handlers, wire
    * models and a `*_routes()` function merged by the server.
*/

pub mod documentation;
pub mod health;
pub mod hello;

// End of file: /src/api/mod.rs
