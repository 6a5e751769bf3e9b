use anyhow::Context;
use request_echo::prelude::*;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigService::new();
    let server = ServerConfig::from_config(&config)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&server.log_filter))
        .init();

    tracing::info!("Starting echo server...");

    let app = Application::builder()
        .interceptor(LoggingInterceptor)
        .controller::<GetController>()
        .build()?;

    for route in app.routes().routes() {
        tracing::info!("  {} {} ({})", route.method(), route.path(), route.name());
    }

    let router = app.router().layer(TraceLayer::new_for_http());

    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
