use std::sync::Arc;

use token_bot::{
    build_router, config::Config, services::coingecko::CoinGeckoService, AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,token_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    tracing::info!("Using CoinGecko API at {}", config.coingecko_base_url);
    let coingecko = CoinGeckoService::new(
        config.coingecko_api_key.clone(),
        config.coingecko_base_url.clone(),
    );

    let state = AppState {
        tokens: Arc::new(coingecko),
        coin_page_url: config.coin_page_url.clone(),
    };

    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
