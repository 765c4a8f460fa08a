// Start of file: /src/api/hello/mod.rs

/*
    * The "hello" feature: a plain greeting, a greeting built from a path
    * parameter and a JSON body, and a greeting that lists the books of the
    * downstream CRUD service.
*/

pub mod handler;
pub mod models;
pub mod routes;

// End of file: /src/api/hello/mod.rs
