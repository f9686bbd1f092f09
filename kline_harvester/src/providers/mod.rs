//! Provider abstraction for market data sources.
//!
//! This module defines the [`MarketDataProvider`] trait, the unified
//! interface for the two read endpoints the pipeline consumes: the
//! instrument-metadata listing and the per-symbol kline series. Concrete
//! implementations (such as [`binance_futures::BinanceFuturesProvider`])
//! handle vendor-specific API logic.
//!
//! The trait is designed for async usage and supports dynamic dispatch
//! (`dyn MarketDataProvider`) so the coordinator can be wired against any
//! provider at construction time.

pub mod binance_futures;
pub mod errors;

use async_trait::async_trait;

use crate::models::{kline::KlineSeries, symbol::Symbol, timeframe::Timeframe};
use crate::providers::errors::{FetchError, ProviderError};

/// A market data vendor exposing instrument metadata and kline series.
///
/// Implementations are stateless between calls and reentrant; the pipeline
/// shares one instance across all concurrent tasks of a run.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Returns the full instrument list, unfiltered, in provider order.
    async fn exchange_symbols(&self) -> Result<Vec<Symbol>, ProviderError>;

    /// Fetches the kline series for one `(symbol, timeframe)` pair.
    async fn fetch_klines(
        &self,
        symbol: &str,
        timeframe: &Timeframe,
    ) -> Result<KlineSeries, FetchError>;
}
