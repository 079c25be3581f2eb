// Start of file: /src/utils/request_logger.rs

/*
    * Request logging middleware. Stamps each request with a start time,
    * lets it through untouched, and logs one structured record once the
    * response is ready. The response itself is passed along unmodified:
    * the greeting endpoint answers with exact plain-text bytes.
*/

use std::time::Instant;
use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{error, info};

// One log record per handled request.
#[derive(Serialize)]
struct RequestLog {
    method: String,
    path: String,
    status: String,
    code: u16,
    time: String,
    date: String,
}

/// Convert any `Serialize` type into a tab‐indented JSON string.
fn to_tab_indented_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut writer = Vec::new();
    // Use `\t` for indentation
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser)?;
    Ok(String::from_utf8(writer).expect("should be valid UTF-8"))
}

pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start_time: Instant = Instant::now();
    let method: String = req.method().to_string();
    let path: String = req.uri().path().to_string();

    // Call the inner handler
    let response: Response = next.run(req).await;

    // Build a reason string from the status (e.g. "OK", "NOT_FOUND")
    let reason: String = response
        .status()
        .canonical_reason()
        .unwrap_or("UNKNOWN")
        .to_uppercase()
        .replace(' ', "_");

    let record: RequestLog = RequestLog {
        method,
        path,
        status: reason,
        code: response.status().as_u16(),
        time: format!("{} ms", start_time.elapsed().as_millis()),
        date: Utc::now().to_rfc3339(),
    };

    // Log the record in a tab‐indented format
    match to_tab_indented_json(&record) {
        Ok(tabbed_json) => {
            info!("\n\n{}\n", tabbed_json);
        }
        Err(err) => {
            error!("Could not format request log as tab‐indented JSON: {err}");
        }
    }

    response
}

// End of file: /src/utils/request_logger.rs
