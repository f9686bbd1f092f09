//! Symbol listing with the pipeline's fixed eligibility policy.

use std::sync::Arc;

use crate::models::symbol::{ContractStatus, ContractType, Symbol};
use crate::providers::{MarketDataProvider, errors::ProviderError};

/// Eligibility predicate applied to the raw instrument list.
///
/// An instrument qualifies only if it is currently trading, settles against
/// the configured quote asset, and has the configured contract type. The
/// policy is fixed at pipeline construction; it cannot change per call.
#[derive(Debug, Clone)]
pub struct SymbolFilter {
    quote_asset: String,
    contract_type: ContractType,
}

impl SymbolFilter {
    pub fn new(quote_asset: String, contract_type: ContractType) -> Self {
        Self {
            quote_asset,
            contract_type,
        }
    }

    pub fn matches(&self, symbol: &Symbol) -> bool {
        symbol.status == ContractStatus::Trading
            && symbol.quote_asset == self.quote_asset
            && symbol.contract_type == self.contract_type
    }
}

/// Resolves the task set for one run.
pub struct SymbolLister {
    provider: Arc<dyn MarketDataProvider>,
    filter: SymbolFilter,
}

impl SymbolLister {
    pub fn new(provider: Arc<dyn MarketDataProvider>, filter: SymbolFilter) -> Self {
        Self { provider, filter }
    }

    /// Queries the instrument list once and applies the filter, preserving
    /// provider order. No deduplication is performed.
    ///
    /// Any transport or decode failure surfaces as [`ProviderError`]; there
    /// is no partial symbol list.
    pub async fn list(&self) -> Result<Vec<Symbol>, ProviderError> {
        let symbols = self.provider.exchange_symbols().await?;
        Ok(symbols
            .into_iter()
            .filter(|s| self.filter.matches(s))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol(name: &str, status: ContractStatus, quote: &str, contract: ContractType) -> Symbol {
        Symbol {
            symbol: name.to_string(),
            quote_asset: quote.to_string(),
            status,
            contract_type: contract,
        }
    }

    fn usdt_perpetual_filter() -> SymbolFilter {
        SymbolFilter::new("USDT".to_string(), ContractType::Perpetual)
    }

    #[test]
    fn requires_all_three_predicates() {
        let filter = usdt_perpetual_filter();

        let eligible = symbol(
            "BTCUSDT",
            ContractStatus::Trading,
            "USDT",
            ContractType::Perpetual,
        );
        let wrong_quote = symbol(
            "ETHBUSD",
            ContractStatus::Trading,
            "BUSD",
            ContractType::Perpetual,
        );
        let not_trading = symbol(
            "SOLUSDT",
            ContractStatus::Break,
            "USDT",
            ContractType::Perpetual,
        );
        let wrong_contract = symbol(
            "BTCUSDT_240927",
            ContractStatus::Trading,
            "USDT",
            ContractType::CurrentQuarter,
        );

        assert!(filter.matches(&eligible));
        assert!(!filter.matches(&wrong_quote));
        assert!(!filter.matches(&not_trading));
        assert!(!filter.matches(&wrong_contract));
    }

    #[test]
    fn mixed_listing_keeps_only_matching_entries() {
        let filter = usdt_perpetual_filter();
        let listing = vec![
            symbol(
                "BTCUSDT",
                ContractStatus::Trading,
                "USDT",
                ContractType::Perpetual,
            ),
            symbol(
                "ETHBUSD",
                ContractStatus::Trading,
                "BUSD",
                ContractType::Perpetual,
            ),
            symbol(
                "SOLUSDT",
                ContractStatus::Break,
                "USDT",
                ContractType::Perpetual,
            ),
        ];

        let kept: Vec<_> = listing
            .iter()
            .filter(|s| filter.matches(s))
            .map(|s| s.symbol.as_str())
            .collect();
        assert_eq!(kept, vec!["BTCUSDT"]);
    }
}
