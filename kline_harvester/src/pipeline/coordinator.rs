//! Bounded fan-out over the per-symbol fetch tasks.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use futures::{StreamExt, stream};

use crate::io::sink::KlineSink;
use crate::models::run::{RunError, RunResult};
use crate::models::timeframe::Timeframe;
use crate::pipeline::fetcher::KlineFetcher;
use crate::pipeline::lister::{SymbolFilter, SymbolLister};
use crate::providers::MarketDataProvider;

/// Orchestrates one run: list once, then fan out one fetch task per symbol
/// under a fixed concurrency window, collecting every terminal outcome.
pub struct Coordinator {
    lister: SymbolLister,
    fetcher: KlineFetcher,
    max_concurrency: usize,
}

impl Coordinator {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        sink: Arc<dyn KlineSink>,
        filter: SymbolFilter,
        max_concurrency: usize,
    ) -> Self {
        Self {
            lister: SymbolLister::new(provider.clone(), filter),
            fetcher: KlineFetcher::new(provider, sink),
            // A window of zero would stall the stream forever.
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Executes one run for `timeframe`.
    ///
    /// Fails wholesale only if the listing stage fails; once the symbol
    /// list is resolved it is fixed for the run, and every symbol reaches a
    /// terminal outcome in the returned [`RunResult`]. At most
    /// `max_concurrency` fetches are in flight at any point; queued tasks
    /// are admitted in listing order as earlier ones complete.
    pub async fn run(&self, timeframe: &Timeframe) -> Result<RunResult, RunError> {
        let started_at = Utc::now();
        let start = Instant::now();

        let symbols = self.lister.list().await?;
        tracing::info!(
            timeframe = %timeframe,
            symbols = symbols.len(),
            max_concurrency = self.max_concurrency,
            "symbol listing complete, fanning out"
        );

        let fetcher = &self.fetcher;
        let mut outcomes = stream::iter(symbols.into_iter().enumerate().map(
            |(index, symbol)| async move {
                let outcome = fetcher.fetch(&symbol.symbol, timeframe).await;
                (index, symbol.symbol, outcome)
            },
        ))
        .buffer_unordered(self.max_concurrency)
        .collect::<Vec<_>>()
        .await;

        // Completion order is arbitrary; report in admission order.
        outcomes.sort_by_key(|(index, _, _)| *index);

        let mut result = RunResult::new(timeframe.clone(), started_at);
        for (_, symbol, outcome) in outcomes {
            match outcome {
                Ok(_) => result.succeeded.push(symbol),
                Err(cause) => {
                    tracing::warn!(symbol = %symbol, error = %cause, "task failed");
                    result.failed.insert(symbol, cause);
                }
            }
        }
        result.elapsed = start.elapsed();

        tracing::info!(
            timeframe = %timeframe,
            succeeded = result.succeeded.len(),
            failed = result.failed.len(),
            elapsed_ms = result.elapsed.as_millis() as u64,
            "run complete"
        );
        Ok(result)
    }
}
