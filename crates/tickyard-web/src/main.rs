use std::error::Error;

use tickyard_web::{create_router, AppState, Config};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    tracing::info!(
        yahoo = %config.yahoo_base_url,
        prediction = %config.prediction_url,
        timeout_ms = config.upstream_timeout_ms,
        "starting tickyard API"
    );

    let app = create_router(AppState::from_config(&config));

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
