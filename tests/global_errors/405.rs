//! tests/global_errors/405.rs
//! Ensures that a wrong method on a known route returns HTTP 405.

// Include the shared helper module from tests/common.
#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_405_for_post_on_hello() {
    let base_url: String = common::spawn_app();

    // The route only registers GET, so the router answers POST itself.
    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
