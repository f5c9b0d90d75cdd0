//! Asynchronous actions that talk to the server and dispatch into the store.

use api::ApiError;
use dioxus_logger::tracing::{info, warn};

use crate::store::{AppStore, CoinAction};

/// Fetches the ticker list and stores it.
///
/// The returned future settles once the store has been updated. On failure
/// the store keeps its previous list and the error is returned to the caller.
pub async fn fetch_coin_data(mut store: AppStore) -> Result<(), ApiError> {
    store.dispatch(CoinAction::FetchStarted);

    match api::fetch_coin_data().await {
        Ok(records) => {
            info!("received {} currency records", records.len());
            store.dispatch(CoinAction::FetchSucceeded(records));
            Ok(())
        }
        Err(e) => {
            warn!("fetching currency data failed: {}", e);
            store.dispatch(CoinAction::FetchFailed);
            Err(e)
        }
    }
}
