use async_trait::async_trait;
use reqwest::{Client, header};
use secrecy::{ExposeSecret, SecretString};
use shared_utils::env::optional_env_var;

use crate::models::{kline::KlineSeries, symbol::Symbol, timeframe::Timeframe};
use crate::providers::{
    MarketDataProvider,
    binance_futures::response::{ExchangeInfo, KlineRows},
    errors::{FetchError, ProviderError, ProviderInitError},
};

const DEFAULT_BASE_URL: &str = "https://fapi.binance.com";
const DEFAULT_KLINE_LIMIT: u32 = 500;

/// Environment variable holding the optional API key. The kline and
/// exchange-info endpoints are public, but authenticated requests get a
/// higher rate-limit budget.
pub const API_KEY_ENV_VAR: &str = "BINANCE_API_KEY";

/// REST client for the Binance USDⓈ-M futures market data endpoints.
///
/// Built once at pipeline construction and shared read-only across all
/// concurrent tasks of a run.
pub struct BinanceFuturesProvider {
    client: Client,
    base_url: String,
    kline_limit: u32,
    _api_key: Option<SecretString>,
}

impl BinanceFuturesProvider {
    /// Creates a provider against the production endpoint.
    ///
    /// Reads the optional API key from the `BINANCE_API_KEY` environment
    /// variable and installs it as a default request header.
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_options(DEFAULT_BASE_URL, DEFAULT_KLINE_LIMIT)
    }

    /// Creates a provider against a custom endpoint with a custom per-fetch
    /// kline limit.
    pub fn with_options(base_url: &str, kline_limit: u32) -> Result<Self, ProviderInitError> {
        let api_key = optional_env_var(API_KEY_ENV_VAR).map(|k| SecretString::new(k.into()));

        let mut headers = header::HeaderMap::new();
        if let Some(key) = &api_key {
            let mut value = header::HeaderValue::from_str(key.expose_secret())?;
            value.set_sensitive(true);
            headers.insert("X-MBX-APIKEY", value);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            kline_limit,
            _api_key: api_key,
        })
    }
}

#[async_trait]
impl MarketDataProvider for BinanceFuturesProvider {
    async fn exchange_symbols(&self) -> Result<Vec<Symbol>, ProviderError> {
        let url = format!("{}/fapi/v1/exchangeInfo", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api { status, message });
        }

        let info = response.json::<ExchangeInfo>().await?;
        Ok(info.symbols)
    }

    async fn fetch_klines(
        &self,
        symbol: &str,
        timeframe: &Timeframe,
    ) -> Result<KlineSeries, FetchError> {
        let url = format!("{}/fapi/v1/klines", self.base_url);
        let query = [
            ("symbol", symbol.to_string()),
            ("interval", timeframe.to_string()),
            ("limit", self.kline_limit.to_string()),
        ];
        let response = self.client.get(&url).query(&query).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(FetchError::Api { status, message });
        }

        let rows = response.json::<KlineRows>().await?;
        Ok(KlineSeries {
            symbol: symbol.to_string(),
            timeframe: timeframe.clone(),
            klines: rows,
        })
    }
}
