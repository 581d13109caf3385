#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use reqwest::StatusCode as UpstreamStatus;
use serde_json::Value;
use token_bot::{
    build_router,
    models::token::{CurrentPrice, MarketData, TokenDetail, TokenImage, TokenIndexEntry},
    services::coingecko::{CoinGeckoError, TokenSource},
    AppState,
};
use tower::ServiceExt;

pub const COIN_PAGE_URL: &str = "https://www.coingecko.com/en/coins";

/// In-memory stand-in for CoinGecko that counts every upstream read.
#[derive(Default)]
pub struct MockTokenSource {
    pub index: Vec<TokenIndexEntry>,
    pub fail_list: bool,
    pub fail_detail: bool,
    pub list_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl MockTokenSource {
    pub fn with_index(index: Vec<TokenIndexEntry>) -> Self {
        Self {
            index,
            ..Default::default()
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenSource for MockTokenSource {
    async fn fetch_token_list(&self) -> Result<Vec<TokenIndexEntry>, CoinGeckoError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_list {
            return Err(CoinGeckoError::Status {
                status: UpstreamStatus::TOO_MANY_REQUESTS,
                body: "rate limited".to_string(),
            });
        }
        Ok(self.index.clone())
    }

    async fn fetch_token(&self, coin_id: &str) -> Result<TokenDetail, CoinGeckoError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_detail {
            return Err(CoinGeckoError::Status {
                status: UpstreamStatus::INTERNAL_SERVER_ERROR,
                body: "boom".to_string(),
            });
        }
        let entry = self
            .index
            .iter()
            .find(|entry| entry.id == coin_id)
            .ok_or_else(|| CoinGeckoError::Status {
                status: UpstreamStatus::NOT_FOUND,
                body: format!("unknown coin {}", coin_id),
            })?;
        Ok(detail_for(entry, 12345.0, 100.0))
    }
}

pub fn entry(id: &str, symbol: &str, name: &str) -> TokenIndexEntry {
    TokenIndexEntry {
        id: id.to_string(),
        symbol: symbol.to_string(),
        name: name.to_string(),
    }
}

pub fn detail_for(entry: &TokenIndexEntry, jpy: f64, usd: f64) -> TokenDetail {
    TokenDetail {
        name: entry.name.clone(),
        symbol: entry.symbol.clone(),
        image: TokenImage {
            thumb: format!("https://img.example/{}/thumb.png", entry.id),
            small: format!("https://img.example/{}/small.png", entry.id),
            large: format!("https://img.example/{}/large.png", entry.id),
        },
        market_data: MarketData {
            current_price: CurrentPrice { jpy, usd },
        },
    }
}

pub fn build_test_router(source: Arc<MockTokenSource>) -> Router {
    build_router(AppState {
        tokens: source,
        coin_page_url: COIN_PAGE_URL.to_string(),
    })
}

/// Posts a JSON `{"text": ...}` body and returns status plus parsed JSON.
pub async fn post_text(app: Router, uri: &str, text: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "text": text }).to_string();
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
