//! HTTP server facade for bookfront with Axum, HTML error pages, and
//! static asset serving.

use anyhow::Context;
use axum::{routing::get, Router};

use bookfront_kernel::{settings::Settings, ModuleRegistry};

pub mod error;
pub mod router;

use router::RouterBuilder;

/// Start the HTTP server with the given module registry
pub async fn start_server(registry: &ModuleRegistry, settings: &Settings) -> anyhow::Result<()> {
    tracing::info!(
        "starting HTTP server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    let app = build_router(registry, settings)
        .await
        .context("failed to build HTTP router")?;

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", settings.server.host, settings.server.port))
            .await
            .context("failed to bind to address")?;

    tracing::info!(
        "HTTP server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // Connections are drained; give modules their shutdown hook.
    registry.stop_modules().await?;

    Ok(())
}

/// Build the main HTTP router with all module routes mounted
pub async fn build_router(
    registry: &ModuleRegistry,
    settings: &Settings,
) -> anyhow::Result<Router> {
    let mut router_builder = RouterBuilder::new();

    // Routes first; layers added afterwards wrap everything registered here.
    router_builder = router_builder.route("/healthz", get(health_check));

    for module in registry.modules() {
        tracing::info!(
            module = module.name(),
            base_path = module.base_path(),
            "mounting module routes"
        );
        router_builder = router_builder.mount_module(module.base_path(), module.routes());
    }

    router_builder = router_builder
        .with_static("/static", &settings.server.static_dir)
        .with_fallback()
        .with_tracing()
        .with_request_id()
        .with_timeout(settings.server.request_timeout_ms);

    Ok(router_builder.build())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to install shutdown signal handler");
        return;
    }
    tracing::info!("shutdown signal received, draining connections");
}
