//! The fan-out pipeline: listing, per-task fetching, coordination, and the
//! interval trigger.

pub mod coordinator;
pub mod fetcher;
pub mod lister;
pub mod scheduler;

use std::sync::Arc;

use crate::config::HarvesterConfig;
use crate::errors::Error;
use crate::io::fs_sink::FsSink;
use crate::pipeline::coordinator::Coordinator;
use crate::pipeline::lister::SymbolFilter;
use crate::providers::binance_futures::BinanceFuturesProvider;

/// Wires a [`Coordinator`] against the Binance futures provider and the
/// filesystem sink described by `config`.
pub fn from_config(config: &HarvesterConfig) -> Result<Coordinator, Error> {
    let provider = BinanceFuturesProvider::with_options(
        &config.provider.base_url,
        config.provider.kline_limit,
    )?;
    let sink = FsSink::new(&config.storage.root);
    let filter = SymbolFilter::new(
        config.filter.quote_asset.clone(),
        config.filter.contract_type.clone(),
    );

    Ok(Coordinator::new(
        Arc::new(provider),
        Arc::new(sink),
        filter,
        config.run.max_concurrency,
    ))
}
