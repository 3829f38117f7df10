use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &dc_console::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        bind = %cfg.bind,
        loglevel = %cfg.loglevel,
        connect_timeout_secs = cfg.connect_timeout_secs,
        max_connections = cfg.max_connections
    );

    // Build axum router and serve
    let state = dc_console::router::ConsoleState::default();
    let app = dc_console::router::console_router(state);

    let listener = TcpListener::bind(&cfg.bind).await?;
    info!("HTTP server listening on {}", cfg.bind);
    axum::serve(listener, app).await?;
    Ok(())
}
