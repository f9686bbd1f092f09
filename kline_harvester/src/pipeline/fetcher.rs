//! The per-task unit of work: fetch one kline series, persist it.

use std::sync::Arc;

use snafu::ResultExt;

use crate::io::sink::{KlineSink, SerializeSnafu, storage_key};
use crate::models::run::TaskError;
use crate::models::timeframe::Timeframe;
use crate::providers::MarketDataProvider;

/// Fetches the kline series for one `(symbol, timeframe)` pair and writes
/// it to the content store.
///
/// Stateless across calls; one instance is shared by all tasks of a run.
pub struct KlineFetcher {
    provider: Arc<dyn MarketDataProvider>,
    sink: Arc<dyn KlineSink>,
}

impl KlineFetcher {
    pub fn new(provider: Arc<dyn MarketDataProvider>, sink: Arc<dyn KlineSink>) -> Self {
        Self { provider, sink }
    }

    /// Exactly one provider call followed by exactly one store write, in
    /// that order. A fetch failure means no write is attempted; a store
    /// failure is not answered by re-fetching. Retry policy, if any, is the
    /// caller's to layer on.
    pub async fn fetch(&self, symbol: &str, timeframe: &Timeframe) -> Result<usize, TaskError> {
        let series = self
            .provider
            .fetch_klines(symbol, timeframe)
            .await
            .map_err(TaskError::Fetch)?;

        let key = storage_key(symbol, timeframe);
        let bytes = series
            .canonical_bytes()
            .context(SerializeSnafu { key: key.as_str() })
            .map_err(TaskError::Store)?;
        self.sink
            .write(&key, &bytes)
            .await
            .map_err(TaskError::Store)?;

        tracing::debug!(symbol, timeframe = %timeframe, klines = series.len(), key, "stored kline series");
        Ok(series.len())
    }
}
