use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::models::token::{TokenDetail, TokenIndexEntry};

const PRO_API_KEY_HEADER: &str = "x-cg-pro-api-key";
const DEMO_API_KEY_HEADER: &str = "x-cg-demo-api-key";

#[derive(Debug, thiserror::Error)]
pub enum CoinGeckoError {
    #[error("CoinGecko request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("CoinGecko API error {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Upstream reads the slash-command handlers depend on.
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Every token CoinGecko knows about, in listing order.
    async fn fetch_token_list(&self) -> Result<Vec<TokenIndexEntry>, CoinGeckoError>;

    async fn fetch_token(&self, coin_id: &str) -> Result<TokenDetail, CoinGeckoError>;
}

#[derive(Clone)]
pub struct CoinGeckoService {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl CoinGeckoService {
    pub fn new(api_key: Option<String>, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_key_header(&self) -> &'static str {
        if self.base_url.contains("pro-api.coingecko.com") {
            PRO_API_KEY_HEADER
        } else {
            DEMO_API_KEY_HEADER
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CoinGeckoError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(query);
        if let Some(api_key) = &self.api_key {
            request = request.header(self.api_key_header(), api_key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(CoinGeckoError::Status { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl TokenSource for CoinGeckoService {
    async fn fetch_token_list(&self) -> Result<Vec<TokenIndexEntry>, CoinGeckoError> {
        tracing::info!("Fetching token list from CoinGecko /coins/list");

        let tokens: Vec<TokenIndexEntry> = self.get_json("/coins/list", &[]).await?;

        tracing::info!("Fetched {} tokens from CoinGecko", tokens.len());

        Ok(tokens)
    }

    async fn fetch_token(&self, coin_id: &str) -> Result<TokenDetail, CoinGeckoError> {
        tracing::info!("Fetching token detail for {} from CoinGecko", coin_id);

        let path = format!("/coins/{}", coin_id);
        let token: TokenDetail = self
            .get_json(
                &path,
                &[
                    ("localization", "false"),
                    ("tickers", "false"),
                    ("community_data", "false"),
                    ("developer_data", "false"),
                ],
            )
            .await?;

        tracing::debug!(
            "Fetched {} ({}): jpy={}, usd={}",
            coin_id,
            token.symbol,
            token.market_data.current_price.jpy,
            token.market_data.current_price.usd
        );

        Ok(token)
    }
}
