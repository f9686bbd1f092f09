use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::timeframe::Timeframe;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StoreError {
    /// The write to the underlying store failed (e.g., file I/O error).
    #[snafu(display("Failed to write object '{key}': {source}"))]
    Write {
        key: String,
        source: std::io::Error,
        backtrace: Backtrace,
    },

    /// The payload could not be converted into the canonical byte encoding.
    #[snafu(display("Failed to serialize payload for '{key}': {source}"))]
    Serialize {
        key: String,
        source: serde_json::Error,
        backtrace: Backtrace,
    },
}

/// Key a `(symbol, timeframe)` pair maps to in the content store.
///
/// Deterministic and collision-free across distinct pairs (symbols and
/// interval codes are alphanumeric, so the `/` separator cannot appear in
/// either part), and stable across runs so a repeat fetch overwrites its
/// predecessor instead of accumulating duplicates.
pub fn storage_key(symbol: &str, timeframe: &Timeframe) -> String {
    format!("{}/{}.json", symbol, timeframe)
}

/// A key-value content store for kline payloads.
///
/// `write` replaces whatever the key previously held. Tasks within a run
/// write to distinct keys, so implementations need no cross-task locking.
#[async_trait]
pub trait KlineSink: Send + Sync {
    /// Writes `bytes` under `key`, overwriting any prior object.
    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}
