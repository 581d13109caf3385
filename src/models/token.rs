use serde::{Deserialize, Serialize};

/// Entry of CoinGecko's `/coins/list` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIndexEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
}

/// Subset of CoinGecko's `/coins/{id}` payload used to build replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDetail {
    pub name: String,
    pub symbol: String,
    pub image: TokenImage,
    pub market_data: MarketData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenImage {
    pub thumb: String,
    pub small: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub current_price: CurrentPrice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPrice {
    pub jpy: f64,
    pub usd: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
