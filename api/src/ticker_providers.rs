//! Defines traits and implementations for external ticker data providers.

use crate::currency_record::CurrencyRecord;
use crate::error::FetchError;
use serde::Deserialize;
use serde::Serialize;

/// Sent with every request; CoinGecko rejects requests without one.
#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!("coinwatch/", env!("CARGO_PKG_VERSION"));

/// A trait for any service that can provide a ranked list of priced assets.
pub trait TickerProvider {
    /// Human readable name, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Fetches the top `limit` assets ordered by market cap rank.
    async fn get_tickers(&self, limit: usize) -> Result<Vec<CurrencyRecord>, FetchError>;
}

/// Selects which provider the server queries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum TickerProviderKind {
    #[default]
    CoinPaprika,
    CoinGecko,
}

#[cfg(not(target_arch = "wasm32"))]
impl TickerProviderKind {
    /// Fetches tickers from the provider this variant names.
    pub async fn get_tickers(&self, limit: usize) -> Result<Vec<CurrencyRecord>, FetchError> {
        match self {
            Self::CoinPaprika => coin_paprika::CoinPaprika.get_tickers(limit).await,
            Self::CoinGecko => coin_gecko::CoinGecko.get_tickers(limit).await,
        }
    }
}

/// GETs `url` and returns the body, turning non-2xx responses into errors.
#[cfg(not(target_arch = "wasm32"))]
async fn fetch_body(provider: &'static str, url: &str) -> Result<String, FetchError> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let resp = client.get(url).send().await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            provider,
            status: status.as_u16(),
        });
    }

    Ok(resp.text().await?)
}

/// Provides ticker data from the CoinPaprika API.
pub mod coin_paprika {
    use super::*;
    use std::collections::HashMap;

    #[derive(Deserialize, Debug)]
    struct Quote {
        price: f64,
        #[serde(default)]
        volume_24h: Option<f64>,
        #[serde(default)]
        market_cap: Option<f64>,
        #[serde(default)]
        percent_change_1h: Option<f64>,
        #[serde(default)]
        percent_change_24h: Option<f64>,
        #[serde(default)]
        percent_change_7d: Option<f64>,
    }

    /// One entry of the `/v1/tickers` response.
    #[derive(Deserialize, Debug)]
    struct Ticker {
        id: String,
        name: String,
        symbol: String,
        rank: u32,
        last_updated: String,
        quotes: HashMap<String, Quote>,
    }

    /// An implementation of the `TickerProvider` trait for CoinPaprika.
    pub struct CoinPaprika;

    #[cfg(not(target_arch = "wasm32"))]
    impl TickerProvider for CoinPaprika {
        fn name(&self) -> &'static str {
            "CoinPaprika"
        }

        async fn get_tickers(&self, limit: usize) -> Result<Vec<CurrencyRecord>, FetchError> {
            // The endpoint has no server side limit, so the full list is trimmed locally.
            const URL: &str = "https://api.coinpaprika.com/v1/tickers?quotes=USD,BTC";

            let body = fetch_body(self.name(), URL).await?;
            parse_tickers(&body, limit)
        }
    }

    /// Converts a `/v1/tickers` body into records, ranked and truncated.
    ///
    /// Tickers without a USD quote are skipped. Unranked assets (rank 0)
    /// sort after every ranked one.
    pub fn parse_tickers(body: &str, limit: usize) -> Result<Vec<CurrencyRecord>, FetchError> {
        let mut tickers: Vec<Ticker> = serde_json::from_str(body)?;
        tickers.sort_by_key(|t| if t.rank == 0 { u32::MAX } else { t.rank });

        let records = tickers
            .into_iter()
            .filter_map(|mut t| {
                let usd = t.quotes.remove("USD")?;
                let price_btc = t.quotes.get("BTC").map(|q| q.price);
                Some(CurrencyRecord {
                    id: t.id,
                    name: t.name,
                    symbol: t.symbol,
                    rank: t.rank,
                    price_usd: usd.price,
                    price_btc,
                    volume_24h_usd: usd.volume_24h,
                    market_cap_usd: usd.market_cap,
                    percent_change_1h: usd.percent_change_1h,
                    percent_change_24h: usd.percent_change_24h,
                    percent_change_7d: usd.percent_change_7d,
                    last_updated: t.last_updated,
                })
            })
            .take(limit)
            .collect();

        Ok(records)
    }
}

/// Provides ticker data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;

    /// One entry of the `/coins/markets` response.
    #[derive(Deserialize, Debug)]
    struct Market {
        id: String,
        symbol: String,
        name: String,
        current_price: Option<f64>,
        #[serde(default)]
        market_cap: Option<f64>,
        #[serde(default)]
        market_cap_rank: Option<u32>,
        #[serde(default)]
        total_volume: Option<f64>,
        #[serde(default)]
        price_change_percentage_1h_in_currency: Option<f64>,
        #[serde(default)]
        price_change_percentage_24h_in_currency: Option<f64>,
        #[serde(default)]
        price_change_percentage_7d_in_currency: Option<f64>,
        #[serde(default)]
        last_updated: Option<String>,
    }

    /// An implementation of the `TickerProvider` trait for CoinGecko.
    pub struct CoinGecko;

    #[cfg(not(target_arch = "wasm32"))]
    impl TickerProvider for CoinGecko {
        fn name(&self) -> &'static str {
            "CoinGecko"
        }

        async fn get_tickers(&self, limit: usize) -> Result<Vec<CurrencyRecord>, FetchError> {
            let url = format!(
                "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={limit}&page=1&price_change_percentage=1h,24h,7d"
            );

            let body = fetch_body(self.name(), &url).await?;
            parse_markets(&body, limit)
        }
    }

    /// Converts a `/coins/markets` body into records.
    ///
    /// CoinGecko already orders by market cap. Entries without a current
    /// price are skipped and symbols are upper-cased to match other providers.
    pub fn parse_markets(body: &str, limit: usize) -> Result<Vec<CurrencyRecord>, FetchError> {
        let markets: Vec<Market> = serde_json::from_str(body)?;

        let records = markets
            .into_iter()
            .filter_map(|m| {
                Some(CurrencyRecord {
                    price_usd: m.current_price?,
                    id: m.id,
                    name: m.name,
                    symbol: m.symbol.to_uppercase(),
                    rank: m.market_cap_rank.unwrap_or(0),
                    price_btc: None,
                    volume_24h_usd: m.total_volume,
                    market_cap_usd: m.market_cap,
                    percent_change_1h: m.price_change_percentage_1h_in_currency,
                    percent_change_24h: m.price_change_percentage_24h_in_currency,
                    percent_change_7d: m.price_change_percentage_7d_in_currency,
                    last_updated: m.last_updated.unwrap_or_default(),
                })
            })
            .take(limit)
            .collect();

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const PAPRIKA_BODY: &str = r#"[
        {
            "id": "eth-ethereum", "name": "Ethereum", "symbol": "ETH", "rank": 2,
            "last_updated": "2023-01-01T00:00:00Z",
            "quotes": {
                "USD": { "price": 1200.5, "volume_24h": 5000000.0, "market_cap": 145000000000.0,
                         "percent_change_1h": 0.1, "percent_change_24h": -2.5, "percent_change_7d": 4.0 },
                "BTC": { "price": 0.072 }
            }
        },
        {
            "id": "new-coin", "name": "Newcoin", "symbol": "NEW", "rank": 0,
            "last_updated": "2023-01-01T00:00:00Z",
            "quotes": { "USD": { "price": 0.01 } }
        },
        {
            "id": "btc-bitcoin", "name": "Bitcoin", "symbol": "BTC", "rank": 1,
            "last_updated": "2023-01-01T00:00:00Z",
            "quotes": {
                "USD": { "price": 16500.0, "percent_change_24h": 1.2 },
                "BTC": { "price": 1.0 }
            }
        },
        {
            "id": "no-usd", "name": "Nousd", "symbol": "NOU", "rank": 3,
            "last_updated": "2023-01-01T00:00:00Z",
            "quotes": {}
        }
    ]"#;

    #[test]
    fn test_paprika_sorts_by_rank_and_skips_missing_usd() {
        let records = coin_paprika::parse_tickers(PAPRIKA_BODY, 10).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["btc-bitcoin", "eth-ethereum", "new-coin"]);

        let eth = &records[1];
        assert_eq!(eth.price_usd, 1200.5);
        assert_eq!(eth.price_btc, Some(0.072));
        assert_eq!(eth.percent_change_24h, Some(-2.5));
        assert_eq!(eth.last_updated, "2023-01-01T00:00:00Z");
    }

    #[test]
    fn test_paprika_truncates_to_limit() {
        let records = coin_paprika::parse_tickers(PAPRIKA_BODY, 1).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bitcoin");
    }

    #[test]
    fn test_gecko_maps_fields() {
        let body = r#"[
            { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin", "current_price": 16500.0,
              "market_cap": 318000000000.0, "market_cap_rank": 1, "total_volume": 9000000.0,
              "price_change_percentage_24h_in_currency": -0.4,
              "last_updated": "2023-01-01T00:00:00.000Z" },
            { "id": "ghost", "symbol": "gh", "name": "Ghost", "current_price": null }
        ]"#;
        let records = coin_gecko::parse_markets(body, 10).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].symbol, "BTC");
        assert_eq!(records[0].rank, 1);
        assert_eq!(records[0].price_btc, None);
        assert!(records[0].is_down_24h());
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = coin_gecko::parse_markets("{\"status\": \"rate limited\"}", 10).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_provider_kind_from_str() {
        assert_eq!(
            TickerProviderKind::from_str("coingecko").unwrap(),
            TickerProviderKind::CoinGecko
        );
        assert_eq!(
            TickerProviderKind::from_str("COINPAPRIKA").unwrap(),
            TickerProviderKind::CoinPaprika
        );
        assert!(TickerProviderKind::from_str("binance").is_err());
    }
}
