//! TOML pipeline configuration.
//!
//! Everything here is fixed at construction time; nothing is configurable
//! per call. A minimal config only needs the filter quote asset and the
//! storage root:
//!
//! ```toml
//! [filter]
//! quote_asset = "USDT"
//!
//! [storage]
//! root = "./data/klines"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::symbol::ContractType;
use crate::models::timeframe::Timeframe;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HarvesterConfig {
    #[serde(default)]
    pub provider: ProviderConfig,
    pub filter: FilterConfig,
    #[serde(default)]
    pub run: RunConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// Base URL of the market data API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Number of klines requested per fetch.
    #[serde(default = "default_kline_limit")]
    pub kline_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterConfig {
    /// Quote asset an instrument must settle against to be fetched.
    pub quote_asset: String,
    /// Contract type an instrument must have to be fetched.
    #[serde(default = "default_contract_type")]
    pub contract_type: ContractType,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Upper bound on simultaneously in-flight kline fetches.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Timeframe used when the CLI does not pass one.
    #[serde(default)]
    pub timeframe: Option<Timeframe>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory the filesystem sink writes under.
    pub root: String,
}

impl HarvesterConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            kline_limit: default_kline_limit(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_concurrency: default_max_concurrency(),
            timeframe: None,
        }
    }
}

fn default_base_url() -> String {
    "https://fapi.binance.com".to_string()
}

fn default_kline_limit() -> u32 {
    500
}

fn default_contract_type() -> ContractType {
    ContractType::Perpetual
}

fn default_max_concurrency() -> usize {
    8
}
