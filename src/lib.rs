// src/lib.rs

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use services::coingecko::TokenSource;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<dyn TokenSource>,
    pub coin_page_url: String,
}

pub mod services {
    pub mod coingecko;
    pub mod response_formatter;
    pub mod token_resolver;
}

pub mod config;
pub mod handlers;
pub mod models;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(hello_token_bot))
        .route("/helloWorld", post(handlers::token::symbol_price))
        .route("/getToken", post(handlers::token::get_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn hello_token_bot() -> &'static str {
    "Hello from Token Bot!"
}
