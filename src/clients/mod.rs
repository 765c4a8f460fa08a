// Start of file: /src/clients/mod.rs

// * Clients for the services this one calls downstream.

pub mod books;

pub use books::{BooksClient, BooksError, HttpBooksClient};

// End of file: /src/clients/mod.rs
