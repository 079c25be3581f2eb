// Start of file: /src/utils/mod.rs

/*
    * Re-exports for cross-cutting modules: global error mapping and
    * the request logging middleware.
*/

pub mod error_handler;
pub mod request_logger;

// End of file: /src/utils/mod.rs
