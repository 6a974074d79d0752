use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

use promocast_gateway::app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "promocast_gateway=info,tower_http=debug".into()),
        )
        .init();

    // load config: explicit PROMOCAST_CONFIG path > ~/.promocast/promocast.toml
    let config_path = std::env::var("PROMOCAST_CONFIG").ok();
    let config = promocast_core::config::PromocastConfig::load(config_path.as_deref())
        .unwrap_or_else(|e| {
            tracing::warn!("Config load failed ({}), using defaults", e);
            promocast_core::config::PromocastConfig::default()
        });

    let bind = config.gateway.bind.clone();
    let port = config.gateway.port;
    info!(
        delay_secs = config.promo.delay,
        "promo triggers {} seconds after each connection", config.promo.delay
    );

    let state = Arc::new(app::AppState::new(config));
    let router = app::build_router(state);

    let addr: SocketAddr = format!("{}:{}", bind, port).parse()?;
    info!("Promocast gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
