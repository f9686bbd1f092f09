#![cfg(test)]
use kline_harvester::models::symbol::{ContractStatus, ContractType};
use kline_harvester::providers::MarketDataProvider;
use kline_harvester::providers::binance_futures::BinanceFuturesProvider;
use serial_test::serial;

// Live tests against the public Binance futures API. Run with
// `cargo test -- --ignored` on a network with API access; an API key in
// BINANCE_API_KEY (or a .env file) raises the rate-limit budget but is not
// required.

#[tokio::test]
#[serial]
#[ignore]
async fn live_exchange_symbols_contains_btc_perpetual() {
    let _ = dotenvy::dotenv();
    let provider = BinanceFuturesProvider::new().expect("Failed to create provider");

    let symbols = provider
        .exchange_symbols()
        .await
        .expect("exchangeInfo request failed");
    assert!(!symbols.is_empty());

    let btc = symbols
        .iter()
        .find(|s| s.symbol == "BTCUSDT")
        .expect("BTCUSDT missing from instrument list");
    assert_eq!(btc.quote_asset, "USDT");
    assert_eq!(btc.status, ContractStatus::Trading);
    assert_eq!(btc.contract_type, ContractType::Perpetual);
}

#[tokio::test]
#[serial]
#[ignore]
async fn live_fetch_klines_returns_rows() {
    let _ = dotenvy::dotenv();
    let provider =
        BinanceFuturesProvider::with_options("https://fapi.binance.com", 5).expect("provider");

    let timeframe = "4h".parse().unwrap();
    let series = provider
        .fetch_klines("BTCUSDT", &timeframe)
        .await
        .expect("klines request failed");

    assert_eq!(series.symbol, "BTCUSDT");
    assert!(!series.is_empty());
    assert!(series.len() <= 5, "expected at most 5 rows due to limit");
    // Every row is an array the pipeline treats as opaque.
    assert!(series.klines.iter().all(|row| row.is_array()));
}
