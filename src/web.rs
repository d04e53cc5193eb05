use axum::routing::get;
use axum::Router;

/// Routes for the liveness endpoint. Hosting platforms poll `/`; the
/// bot itself never reads from this server.
pub fn router() -> Router {
    Router::new()
        .route("/", get(|| async { "Bot is running!" }))
        .route("/health", get(|| async { "OK" }))
}

/// Serve the health-check endpoint until the process exits.
pub async fn serve(port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("Health endpoint listening on port {port}");
    axum::serve(listener, router()).await?;
    Ok(())
}
