// Start of file: /src/api/hello/handler.rs

/*
    * This file contains the handler logic for the "hello" endpoint.
    * It greets the caller by the optional `name` query parameter,
    * falling back to "World" when the parameter is absent.
*/

use axum::extract::{Query, State};
use serde::Deserialize;

use crate::config::state::AppState;

// Query parameters accepted by the hello endpoint. A request without
// `name` binds to `None`; `?name=` binds to `Some("")` and is greeted
// verbatim like any other value.
#[derive(Debug, Deserialize)]
pub struct GreetingParams {
    pub name: Option<String>,
}

pub async fn hello_handler(
    State(_state): State<AppState>,
    Query(params): Query<GreetingParams>,
) -> String {
    format!("Hello {}!", params.name.as_deref().unwrap_or("World"))
}

// End of file: /src/api/hello/handler.rs
