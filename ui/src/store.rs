//! The application wide store holding fetched currency data.
//!
//! State changes only through [`AppStore::dispatch`], which runs the pure
//! [`reduce`] function. Components read the state through the accessors,
//! which subscribe them to future changes.

use std::sync::Arc;

use api::currency_record::CurrencyRecord;
use dioxus::prelude::*;

/// The shared state slice for cryptocurrency data.
#[derive(Clone, Debug, PartialEq)]
pub struct CoinState {
    /// The latest ticker list, in provider order.
    pub crypto: Arc<[CurrencyRecord]>,
    /// Incremented on every successful load, even if the data is unchanged.
    pub revision: u64,
    /// `true` while a fetch is outstanding.
    pub loading: bool,
}

impl Default for CoinState {
    fn default() -> Self {
        Self {
            crypto: Arc::from(Vec::new()),
            revision: 0,
            loading: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CoinAction {
    FetchStarted,
    FetchSucceeded(Vec<CurrencyRecord>),
    FetchFailed,
}

/// Computes the next state. A failed fetch keeps the previous list.
pub fn reduce(state: &CoinState, action: CoinAction) -> CoinState {
    match action {
        CoinAction::FetchStarted => CoinState {
            loading: true,
            ..state.clone()
        },
        CoinAction::FetchSucceeded(records) => CoinState {
            crypto: Arc::from(records),
            revision: state.revision + 1,
            loading: false,
        },
        CoinAction::FetchFailed => CoinState {
            loading: false,
            ..state.clone()
        },
    }
}

/// A handle to the store, provided as a Dioxus context.
#[derive(Clone, Copy)]
pub struct AppStore {
    state: Signal<CoinState>,
}

impl AppStore {
    pub fn new(state: Signal<CoinState>) -> Self {
        Self { state }
    }

    pub fn dispatch(&mut self, action: CoinAction) {
        let next = reduce(&self.state.peek(), action);
        self.state.set(next);
    }

    /// The current ticker list. Subscribes the caller.
    pub fn crypto(&self) -> Arc<[CurrencyRecord]> {
        self.state.read().crypto.clone()
    }

    /// The current revision. Subscribes the caller.
    pub fn revision(&self) -> u64 {
        self.state.read().revision
    }

    /// `true` while any fetch is outstanding. Subscribes the caller.
    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    /// The current ticker list without subscribing.
    pub fn peek_crypto(&self) -> Arc<[CurrencyRecord]> {
        self.state.peek().crypto.clone()
    }
}

pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<CurrencyRecord> {
        vec![
            CurrencyRecord::new("btc", "Bitcoin", "BTC", "2023-01-01"),
            CurrencyRecord::new("eth", "Ethereum", "ETH", "2023-01-01"),
        ]
    }

    #[test]
    fn test_fetch_started_sets_loading() {
        let state = reduce(&CoinState::default(), CoinAction::FetchStarted);
        assert!(state.loading);
        assert!(state.crypto.is_empty());
        assert_eq!(state.revision, 0);
    }

    #[test]
    fn test_success_replaces_list_and_bumps_revision() {
        let loaded = reduce(&CoinState::default(), CoinAction::FetchSucceeded(records()));
        assert_eq!(loaded.crypto.len(), 2);
        assert_eq!(loaded.revision, 1);
        assert!(!loaded.loading);

        let reloaded = reduce(&loaded, CoinAction::FetchSucceeded(records()));
        assert_eq!(reloaded.crypto, loaded.crypto);
        assert_eq!(reloaded.revision, 2);
    }

    #[test]
    fn test_failure_keeps_stale_list() {
        let loaded = reduce(&CoinState::default(), CoinAction::FetchSucceeded(records()));
        let started = reduce(&loaded, CoinAction::FetchStarted);
        let failed = reduce(&started, CoinAction::FetchFailed);

        assert_eq!(failed.crypto, loaded.crypto);
        assert_eq!(failed.revision, loaded.revision);
        assert!(!failed.loading);
    }
}
