use std::env;
use std::net::SocketAddr;

const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_COIN_PAGE_URL: &str = "https://www.coingecko.com/en/coins";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

const ENV_COINGECKO_BASE_URL: &str = "COINGECKO_BASE_URL";
const ENV_COINGECKO_API_KEY: &str = "COINGECKO_API_KEY";
const ENV_COIN_PAGE_URL: &str = "COINGECKO_COIN_PAGE_URL";
const ENV_BIND_ADDRESS: &str = "BIND_ADDRESS";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not a valid socket address: {value}")]
    InvalidAddress { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub coingecko_base_url: String,
    pub coingecko_api_key: Option<String>,
    pub coin_page_url: String,
    pub bind_address: SocketAddr,
}

impl Config {
    /// Reads settings from the process environment, falling back to the
    /// public CoinGecko endpoints.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_value =
            non_empty(ENV_BIND_ADDRESS).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_value
            .parse()
            .map_err(|_| ConfigError::InvalidAddress {
                name: ENV_BIND_ADDRESS,
                value: bind_value.clone(),
            })?;

        Ok(Self {
            coingecko_base_url: non_empty(ENV_COINGECKO_BASE_URL)
                .unwrap_or_else(|| DEFAULT_COINGECKO_BASE_URL.to_string()),
            coingecko_api_key: non_empty(ENV_COINGECKO_API_KEY),
            coin_page_url: non_empty(ENV_COIN_PAGE_URL)
                .unwrap_or_else(|| DEFAULT_COIN_PAGE_URL.to_string()),
            bind_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.coingecko_base_url, DEFAULT_COINGECKO_BASE_URL);
        assert_eq!(config.coingecko_api_key, None);
        assert_eq!(config.coin_page_url, DEFAULT_COIN_PAGE_URL);
        assert_eq!(config.bind_address.port(), 3000);
    }

    #[test]
    fn test_overrides_and_blank_key() {
        let config = config_from(&[
            (ENV_COINGECKO_BASE_URL, "https://pro-api.coingecko.com/api/v3"),
            (ENV_COINGECKO_API_KEY, "  "),
            (ENV_BIND_ADDRESS, "127.0.0.1:8080"),
        ])
        .unwrap();
        assert_eq!(config.coingecko_base_url, "https://pro-api.coingecko.com/api/v3");
        assert_eq!(config.coingecko_api_key, None);
        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_invalid_bind_address() {
        let err = config_from(&[(ENV_BIND_ADDRESS, "not-an-address")]).unwrap_err();
        assert!(err.to_string().contains("not-an-address"));
    }
}
