// Start of file: /src/utils/error_handler.rs

/*
    * Maps errors surfaced by the middleware layers (timeouts, oversized
    * payloads) onto HTTP responses. The bodies are short plain-text
    * strings, matching what the greeting routes themselves write.
*/

use std::error::Error;
use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use http_body_util::LengthLimitError;
use tower::timeout::error::Elapsed;
use tracing::warn;

pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // A body that blew past the configured limit surfaces as a
    // LengthLimitError somewhere down the source chain.
    if source_of::<LengthLimitError>(&*err).is_some() {
        warn!("Rejecting request: body exceeds the configured limit");
        return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
    }

    // The timeout layer reports an elapsed deadline as the top-level error.
    if err.is::<Elapsed>() {
        warn!("Rejecting request: handler exceeded the configured timeout");
        return (StatusCode::REQUEST_TIMEOUT, "Request timed out");
    }

    (StatusCode::INTERNAL_SERVER_ERROR, "Unhandled internal error")
}

// Walks the source chain looking for an error of a specific type.
fn source_of<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut cause: Option<&dyn Error> = err.source();

    while let Some(current) = cause {
        match current.downcast_ref::<T>() {
            Some(typed) => return Some(typed),
            None => cause = current.source(),
        }
    }

    None
}

// End of file: /src/utils/error_handler.rs
