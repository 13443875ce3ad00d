use bs_client::BacklogClient;
use bs_server::{AppState, ServerErrorResult, build_router, logger};

use std::net::SocketAddr;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    // Load and validate configuration
    let config = bs_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting bs-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Upstream client
    let client = BacklogClient::from_config(&config.upstream)?;
    info!("Upstream client ready: {}", client.base_url);

    // Build application state and router
    let app_state = AppState::new(Arc::new(client), &config.rate_limit);

    // Drop idle clients from the search limiter once per window
    if let Some(limiter) = app_state.rate_limiter.clone() {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(limiter.window());
            loop {
                ticker.tick().await;
                limiter.retain_recent();
            }
        });
    }

    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on http://{}", actual_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
            Err(e) => error!("Failed to listen for SIGINT: {}", e),
        }
    })
    .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
