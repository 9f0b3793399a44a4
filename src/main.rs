use std::sync::Arc;

use tower_http::cors::CorsLayer;

use relay_backend::config::AppConfig;
use relay_backend::routes;
use relay_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::new(&config)?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router(&config.static_dir)
        .with_state(state)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        downstream = %config.downstream_url,
        "relay listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
