use anyhow::Context;
use bookfront_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::try_init().ok();

    let settings = Settings::load().with_context(|| "failed to load bookfront settings")?;

    tracing::info!(
        env = ?settings.environment,
        secret_configured = settings.server.secret.is_some(),
        "bookfront bootstrap starting"
    );

    let mut registry = ModuleRegistry::new();
    bookfront::modules::register_all(&mut registry);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;
    registry.start_modules(&ctx).await?;

    bookfront_http::start_server(&registry, &settings).await?;

    tracing::info!("bookfront shutdown complete");
    Ok(())
}
