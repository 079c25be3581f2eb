//! tests/common/mod.rs
//! Shared test helpers to spawn the app on an ephemeral port.

use std::time::Duration;
use axum::{
    serve,
    Router,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
    middleware::from_fn,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::net::TcpListener as TokioTcpListener;

use greeting_service::api::hello::routes::hello_routes;
use greeting_service::config::state::AppState;
use greeting_service::core::server::create_app;
use greeting_service::utils::{
    error_handler::handle_global_error,
    request_logger::request_logger,
};

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app() -> String {
    // * Build the application with the same layers as main().
    spawn(create_app())
}

/// Spawns an app with extra routes and tightened limits, mirroring the
/// layer stack from `create_app`. The greeting route alone answers
/// instantly and reads no body, so tests use this to drive the timeout
/// and body-limit layers.
pub fn spawn_app_with(
    extra_routes: Router<AppState>,
    timeout_seconds: u64,
    max_body_size: usize,
) -> String {
    let state: AppState = AppState::instance().clone();

    let app: Router = Router::new()
        .merge(hello_routes())
        .merge(extra_routes)
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(request_logger))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(timeout_seconds)))
                .layer(DefaultBodyLimit::max(max_body_size))
        )
        .with_state(state);

    spawn(app)
}

fn spawn(app: Router) -> String {
    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
