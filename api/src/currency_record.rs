//! Defines the priced asset entry shared between the server and the UI.

use serde::Deserialize;
use serde::Serialize;

/// One priced asset, as delivered to the currency list.
///
/// All prices are quoted in USD. Provider specific payloads are converted
/// into this shape by the `ticker_providers` module so the client never
/// sees vendor JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRecord {
    /// Provider identifier, unique within a list (e.g. `btc-bitcoin`).
    pub id: String,
    /// Display name (e.g. `Bitcoin`).
    pub name: String,
    /// Ticker symbol (e.g. `BTC`).
    pub symbol: String,
    /// Market cap rank. `0` when the provider does not rank the asset.
    pub rank: u32,
    pub price_usd: f64,
    #[serde(default)]
    pub price_btc: Option<f64>,
    #[serde(default)]
    pub volume_24h_usd: Option<f64>,
    #[serde(default)]
    pub market_cap_usd: Option<f64>,
    #[serde(default)]
    pub percent_change_1h: Option<f64>,
    #[serde(default)]
    pub percent_change_24h: Option<f64>,
    #[serde(default)]
    pub percent_change_7d: Option<f64>,
    /// Provider timestamp of the last price update, kept verbatim.
    pub last_updated: String,
}

impl CurrencyRecord {
    /// Creates a record carrying only the fields the list needs to render.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        symbol: impl Into<String>,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            rank: 0,
            price_usd: 0.0,
            price_btc: None,
            volume_24h_usd: None,
            market_cap_usd: None,
            percent_change_1h: None,
            percent_change_24h: None,
            percent_change_7d: None,
            last_updated: last_updated.into(),
        }
    }

    /// Returns `true` if the 24h change is known and negative.
    pub fn is_down_24h(&self) -> bool {
        self.percent_change_24h.is_some_and(|pct| pct < 0.0)
    }
}
