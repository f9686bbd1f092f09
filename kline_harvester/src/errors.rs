use thiserror::Error;

use crate::config::ConfigError;
use crate::models::run::RunError;
use crate::providers::errors::ProviderInitError;

/// The unified error type for the `kline_harvester` crate.
///
/// Per-task failures are not errors at this level; they are data, collected
/// in [`RunResult`](crate::models::run::RunResult).
#[derive(Debug, Error)]
pub enum Error {
    /// The pipeline configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A provider client could not be constructed.
    #[error("Provider init error: {0}")]
    ProviderInit(#[from] ProviderInitError),

    /// A run aborted before fan-out.
    #[error("Run error: {0}")]
    Run(#[from] RunError),
}
