//! Opaque kline payloads.

use serde_json::Value;

use crate::models::timeframe::Timeframe;

/// The kline series for one `(symbol, timeframe)` pair, as returned by the
/// provider.
///
/// Each row is kept as the raw JSON array the kline endpoint emits. The
/// pipeline never interprets the rows; it only serializes them back out to
/// the content store, so a provider-side schema change cannot corrupt or
/// drop fields in transit.
#[derive(Debug, Clone, PartialEq)]
pub struct KlineSeries {
    /// The symbol this data represents (e.g., "BTCUSDT").
    pub symbol: String,
    /// The time interval of each kline in the series.
    pub timeframe: Timeframe,
    /// The verbatim kline rows.
    pub klines: Vec<Value>,
}

impl KlineSeries {
    /// Canonical byte encoding written to the content store: the verbatim
    /// row array, JSON-encoded. Stable for identical payloads, so repeated
    /// fetches of an unchanged series overwrite a key with identical bytes.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.klines)
    }

    pub fn len(&self) -> usize {
        self.klines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.klines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn series(rows: Vec<Value>) -> KlineSeries {
        KlineSeries {
            symbol: "BTCUSDT".to_string(),
            timeframe: "4h".parse().unwrap(),
            klines: rows,
        }
    }

    #[test]
    fn canonical_bytes_preserve_rows_verbatim() {
        let rows = vec![json!([1625097600000u64, "33510.0", "33700.1", "33300.0", "33650.2", "1204.5"])];
        let bytes = series(rows.clone()).canonical_bytes().unwrap();
        let decoded: Vec<Value> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(decoded, rows);
    }

    #[test]
    fn canonical_bytes_are_stable() {
        let rows = vec![json!([1u64, "a"]), json!([2u64, "b"])];
        let a = series(rows.clone()).canonical_bytes().unwrap();
        let b = series(rows).canonical_bytes().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_series_encodes_as_empty_array() {
        let bytes = series(vec![]).canonical_bytes().unwrap();
        assert_eq!(bytes, b"[]");
    }
}
