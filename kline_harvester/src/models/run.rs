//! Per-run outcome aggregation.

use std::time::Duration;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use thiserror::Error;

use crate::io::sink::StoreError;
use crate::models::timeframe::Timeframe;
use crate::providers::errors::{FetchError, ProviderError};

/// Terminal failure of a single fetch-and-store task.
///
/// The two variants deliberately mirror the two side effects of a task: the
/// provider call and the store write. Callers can remediate them
/// differently, e.g. re-run only the symbols whose data was fetched but not
/// persisted.
#[derive(Debug, Error)]
pub enum TaskError {
    /// The provider call failed; no write was attempted.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The provider call succeeded but the store write failed.
    #[error("store failed: {0}")]
    Store(#[from] StoreError),
}

impl TaskError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, TaskError::Fetch(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(self, TaskError::Store(_))
    }
}

/// Wholesale failure of a run.
///
/// The only way a run fails as a whole is the listing stage failing before
/// any task was admitted. Task failures never surface here; they are
/// recorded in [`RunResult::failed`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error("symbol listing failed: {0}")]
    Listing(#[from] ProviderError),
}

/// Aggregated outcome of one coordinator run.
///
/// Every symbol returned by the listing stage appears in exactly one of
/// `succeeded` or `failed`; a run with every task failed is still a
/// completed run, distinct from the [`RunError::Listing`] abort.
#[derive(Debug)]
pub struct RunResult {
    /// Timeframe the run was invoked with.
    pub timeframe: Timeframe,
    /// Wall-clock instant the run started (before the listing call).
    pub started_at: DateTime<Utc>,
    /// Total wall time of the run.
    pub elapsed: Duration,
    /// Symbols whose kline series was fetched and stored, in admission order.
    pub succeeded: Vec<String>,
    /// Failed symbols and their causes, in admission order.
    pub failed: IndexMap<String, TaskError>,
}

impl RunResult {
    pub(crate) fn new(timeframe: Timeframe, started_at: DateTime<Utc>) -> Self {
        Self {
            timeframe,
            started_at,
            elapsed: Duration::ZERO,
            succeeded: Vec::new(),
            failed: IndexMap::new(),
        }
    }

    /// Number of tasks that reached a terminal outcome.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
