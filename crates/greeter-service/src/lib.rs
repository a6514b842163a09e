pub mod config;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use ops_sdk::Ux;
use tower_http::trace::TraceLayer;

pub use config::ServiceConfig;

pub const GREETING: &str = "Hello, World!";
pub const STARTUP_NOTICE: &str = "Starting server";

/// GET / — the only route.
pub async fn hello_world() -> &'static str {
    GREETING
}

/// Build the axum Router. Used by `serve()` and available for integration
/// testing. Unknown paths fall through to axum's default 404.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(hello_world))
        .layer(TraceLayer::new_for_http())
}

/// Print the startup notice, then bind `config.addr()` and serve until the
/// process is stopped.
pub async fn start(config: &ServiceConfig, ux: &mut Ux) -> anyhow::Result<()> {
    ux.print(STARTUP_NOTICE)?;
    serve(config).await
}

/// Bind the configured address and serve.
pub async fn serve(config: &ServiceConfig) -> anyhow::Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    serve_on(listener).await
}

/// Serve on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(listener: tokio::net::TcpListener) -> anyhow::Result<()> {
    let local = listener.local_addr()?;
    tracing::info!("greeter listening on http://{local}");
    axum::serve(listener, build_router()).await?;
    Ok(())
}
