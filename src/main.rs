// Start of file: /src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;

use greeting_service::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    logging::init_tracing();

    // build our router
    let app: Router = server::create_app();

    // Listenfd integration (falls back to binding HOST:PORT)
    let listener: TcpListener = server::setup_listener().await?;

    println!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: /src/main.rs
