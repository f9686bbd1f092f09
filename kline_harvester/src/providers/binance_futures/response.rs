use serde::Deserialize;
use serde_json::Value;

use crate::models::symbol::Symbol;

/// Subset of the `/fapi/v1/exchangeInfo` response the pipeline reads.
#[derive(Deserialize, Debug)]
pub struct ExchangeInfo {
    pub symbols: Vec<Symbol>,
}

/// The `/fapi/v1/klines` response body: one JSON array per kline.
///
/// Rows stay opaque [`Value`]s; see
/// [`KlineSeries`](crate::models::kline::KlineSeries).
pub type KlineRows = Vec<Value>;

#[cfg(test)]
mod tests {
    use crate::models::symbol::{ContractStatus, ContractType};

    use super::*;

    #[test]
    fn parses_exchange_info_and_ignores_extra_fields() {
        let raw = r#"{
            "timezone": "UTC",
            "serverTime": 1719820000000,
            "rateLimits": [{"rateLimitType": "REQUEST_WEIGHT", "interval": "MINUTE", "limit": 2400}],
            "symbols": [
                {"symbol": "BTCUSDT", "status": "TRADING", "quoteAsset": "USDT", "contractType": "PERPETUAL", "pricePrecision": 2},
                {"symbol": "ETHUSDT_240927", "status": "TRADING", "quoteAsset": "USDT", "contractType": "CURRENT_QUARTER"}
            ]
        }"#;
        let info: ExchangeInfo = serde_json::from_str(raw).unwrap();
        assert_eq!(info.symbols.len(), 2);
        assert_eq!(info.symbols[0].symbol, "BTCUSDT");
        assert_eq!(info.symbols[0].status, ContractStatus::Trading);
        assert_eq!(info.symbols[1].contract_type, ContractType::CurrentQuarter);
    }
}
