use super::locale::Locale;
use crate::ticker_providers::TickerProviderKind;
use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// Default number of assets shown in the currency list.
pub const DEFAULT_TICKER_LIMIT: usize = 100;

/// Upper bound accepted from `TICKER_LIMIT`; CoinGecko pages top out at 250.
pub const MAX_TICKER_LIMIT: usize = 250;

/// Represents all user prefs. Read from env vars on the server and handed to the client.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    locale: Locale,
    ticker_provider: TickerProviderKind,
    ticker_limit: usize,
}

impl UserPrefs {
    pub fn new(locale: Locale, ticker_provider: TickerProviderKind, ticker_limit: usize) -> Self {
        Self {
            locale,
            ticker_provider,
            ticker_limit: ticker_limit.clamp(1, MAX_TICKER_LIMIT),
        }
    }

    /// Creates prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `COINWATCH_LOCALE`: "en", "de", "fr" or "es". Falls back to `LANG`.
    /// - `TICKER_PROVIDER`: "coinpaprika" or "coingecko".
    /// - `TICKER_LIMIT`: number of assets to list, 1 to 250.
    pub fn from_env() -> Self {
        let ticker_provider = env::var("TICKER_PROVIDER")
            .ok()
            .and_then(|s| TickerProviderKind::from_str(s.trim()).ok())
            .unwrap_or_default();

        let ticker_limit = env::var("TICKER_LIMIT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_TICKER_LIMIT);

        Self::new(Locale::from_env(), ticker_provider, ticker_limit)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn ticker_provider(&self) -> TickerProviderKind {
        self.ticker_provider
    }

    pub fn ticker_limit(&self) -> usize {
        self.ticker_limit
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_clamped() {
        let prefs = UserPrefs::new(Locale::En, TickerProviderKind::CoinGecko, 0);
        assert_eq!(prefs.ticker_limit(), 1);

        let prefs = UserPrefs::new(Locale::En, TickerProviderKind::CoinGecko, 10_000);
        assert_eq!(prefs.ticker_limit(), MAX_TICKER_LIMIT);

        let prefs = UserPrefs::new(Locale::Fr, TickerProviderKind::CoinPaprika, 50);
        assert_eq!(prefs.ticker_limit(), 50);
        assert_eq!(prefs.locale(), Locale::Fr);
    }
}
