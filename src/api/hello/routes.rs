// Start of file: /src/api/hello/routes.rs

/*
    * This file defines the route(s) for the "hello" endpoint.
    * We register one GET route at `/hello` that calls `hello_handler`.
*/

use axum::{routing::get, Router};

use crate::api::hello::handler::hello_handler;
use crate::config::state::AppState;

pub fn hello_routes() -> Router<AppState> {
    // This sets up the GET /hello route with the hello_handler
    Router::new()
        .route("/hello", get(hello_handler))
}

// End of file: /src/api/hello/routes.rs
