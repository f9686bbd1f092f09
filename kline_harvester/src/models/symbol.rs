//! Instrument metadata as reported by the exchange-info endpoint.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a contract.
///
/// Only [`ContractStatus::Trading`] instruments are eligible for fetching;
/// every status the exchange may add later collapses into `Other` so a new
/// status value never breaks deserialization of the full instrument list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractStatus {
    Trading,
    PendingTrading,
    Settling,
    Close,
    Break,
    #[serde(other)]
    Other,
}

/// Contract flavor of a derivatives instrument.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Perpetual,
    CurrentQuarter,
    NextQuarter,
    #[serde(other)]
    #[default]
    Other,
}

/// One tradeable instrument from the provider's instrument list.
///
/// Produced fresh on each run by the symbol listing stage and never
/// persisted; it only exists for the lifetime of a single run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Symbol {
    /// Exchange ticker (e.g., "BTCUSDT").
    pub symbol: String,
    /// Quote asset the contract settles against (e.g., "USDT").
    pub quote_asset: String,
    /// Current lifecycle status.
    pub status: ContractStatus,
    /// Contract flavor. Missing on some instrument kinds, in which case it
    /// deserializes to [`ContractType::Other`] and is filtered out.
    #[serde(default)]
    pub contract_type: ContractType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_known_fields() {
        let raw = r#"{
            "symbol": "BTCUSDT",
            "quoteAsset": "USDT",
            "status": "TRADING",
            "contractType": "PERPETUAL",
            "pricePrecision": 2
        }"#;
        let symbol: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(symbol.symbol, "BTCUSDT");
        assert_eq!(symbol.status, ContractStatus::Trading);
        assert_eq!(symbol.contract_type, ContractType::Perpetual);
    }

    #[test]
    fn unknown_status_maps_to_other() {
        let raw = r#"{
            "symbol": "XYZUSDT",
            "quoteAsset": "USDT",
            "status": "PRE_DELIVERING",
            "contractType": "PERPETUAL"
        }"#;
        let symbol: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(symbol.status, ContractStatus::Other);
    }

    #[test]
    fn missing_contract_type_defaults_to_other() {
        let raw = r#"{
            "symbol": "BTCUSDT_230630",
            "quoteAsset": "USDT",
            "status": "TRADING"
        }"#;
        let symbol: Symbol = serde_json::from_str(raw).unwrap();
        assert_eq!(symbol.contract_type, ContractType::Other);
    }
}
