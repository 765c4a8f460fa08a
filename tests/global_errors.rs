//! tests/global_errors.rs
//! This file serves as an integration test crate that aggregates all
//! tests from the global_errors subdirectory.

mod common;

// Use an inline module to import submodules from the global_errors folder.
#[cfg(test)]
mod global_errors {
    #[path = "../global_errors/404.rs"]
    mod e404;

    #[path = "../global_errors/405.rs"]
    mod e405;

    #[path = "../global_errors/408.rs"]
    mod e408;

    #[path = "../global_errors/413.rs"]
    mod e413;

    #[path = "../global_errors/500.rs"]
    mod e500;

    #[path = "../global_errors/documentation.rs"]
    mod documentation;
}
