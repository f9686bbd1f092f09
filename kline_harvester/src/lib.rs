//! Bounded-concurrency kline harvesting pipeline for Binance USDⓈ-M futures.
//!
//! One run lists the eligible perpetual contracts, fans out one fetch task
//! per symbol under a fixed concurrency window, and persists each kline
//! series to a content store keyed by `(symbol, timeframe)`. Per-task
//! failures are collected into a [`RunResult`](models::run::RunResult)
//! instead of aborting the run.

pub mod config;
pub mod errors;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod providers;

pub use errors::Error;
