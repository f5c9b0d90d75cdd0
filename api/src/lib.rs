//! This crate contains all shared fullstack server functions.

pub mod currency_record;
pub mod error;
pub mod prefs;
#[cfg(not(target_arch = "wasm32"))]
mod ticker_caching;
pub mod ticker_providers;

use currency_record::CurrencyRecord;
use dioxus::prelude::*;
use prefs::user_prefs::UserPrefs;

pub type ApiError = anyhow::Error;

/// Retrieves the user's preferences.
///
/// In the future this may read from a settings file.  For now it just
/// returns the default settings, which read from env vars.
#[post("/api/get_user_prefs")]
pub async fn get_user_prefs() -> Result<UserPrefs, ApiError> {
    Ok(UserPrefs::default())
}

/// Returns the ranked ticker list from the configured provider.
///
/// Results are cached for a minute so every client polling this endpoint
/// shares one upstream request.
#[post("/api/fetch_coin_data")]
pub async fn fetch_coin_data() -> Result<Vec<CurrencyRecord>, ApiError> {
    let prefs = UserPrefs::default();
    let provider = prefs.ticker_provider();

    match ticker_caching::get_cached_tickers(provider, prefs.ticker_limit()).await {
        Ok(records) => Ok(records),
        Err(e) => {
            dioxus_logger::tracing::warn!(
                "ticker fetch from {} failed: {}",
                <&'static str>::from(provider),
                e
            );
            Err(e.into())
        }
    }
}
