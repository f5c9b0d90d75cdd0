// File: src/screens/currencies.rs

use api::prefs::user_prefs::UserPrefs;
use dioxus::core::spawn_forever;
use dioxus::html::point_interaction::InteractionLocation;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, warn};

use crate::actions;
use crate::components::coin_row::CoinRow;
use crate::components::common::{Header, Separator, Spinner};
use crate::components::pico::Button;
use crate::components::search_bar::SearchBar;
use crate::currency_list::{start_refresh, CurrencyListState, ScreenView};
use crate::i18n::{t, MessageKey};
use crate::navigation::{NavigationOptions, TabIcon};
use crate::pull_to_refresh::PullGesture;
use crate::store::use_app_store;
use crate::theme::CONTAINER_MARGIN_TOP_PX;

/// Tab bar entry and header behavior for this screen.
pub const NAVIGATION_OPTIONS: NavigationOptions = NavigationOptions {
    tab_bar_icon: TabIcon {
        name: "bank",
        size: 20,
    },
    header_shown: false,
};

fn first_touch_y(evt: &TouchEvent) -> Option<f64> {
    evt.touches().first().map(|touch| touch.client_coordinates().y)
}

#[component]
pub fn CurrenciesScreen() -> Element {
    let store = use_app_store();
    let locale = use_context::<UserPrefs>().locale();

    let mut list = use_signal(CurrencyListState::default);
    let mut gesture = use_signal(PullGesture::default);

    // Fetch once on mount. Runs in the root scope so leaving the tab does not drop it.
    use_effect(move || {
        spawn_forever(async move {
            // failures leave the loading indicator up; actions already logged them.
            let _ = actions::fetch_coin_data(store).await;
        });
    });

    // Mirror every new store revision into local state, resetting any search.
    let revision = use_memo(move || store.revision());
    use_effect(move || {
        let revision = revision();
        if list.peek().revision() != revision {
            debug!("currency list received store revision {}", revision);
            list.with_mut(|l| l.receive(revision, store.peek_crypto()));
        }
    });

    let refresh = move || {
        let Some(task) = start_refresh(list, actions::fetch_coin_data(store)) else {
            return;
        };
        debug!("currency list refresh started");
        spawn(async move {
            if let Err(e) = task.await {
                warn!("currency list refresh failed: {}", e);
            }
            debug!("currency list refresh settled");
        });
    };

    let store_list = store.crypto();
    let view = list.read().view(&store_list);

    match view {
        ScreenView::Loading => rsx! {
            Spinner {}
        },
        ScreenView::List {
            last_updated,
            rows,
            refreshing,
        } => {
            let pull_distance = gesture.read().distance().min(96.0);
            let button_busy = refreshing || store.is_loading();
            let indicator_busy = if refreshing { "true" } else { "false" };
            let indicator_height = if refreshing {
                pull_distance.max(32.0)
            } else {
                pull_distance
            };
            rsx! {
                div {
                    style: "flex: 1; display: flex; flex-direction: column; min-height: 0; margin-top: {CONTAINER_MARGIN_TOP_PX}px;",
                    div {
                        style: "display: flex; align-items: center; justify-content: space-between; gap: 0.5rem;",
                        Header {
                            title: t(locale, MessageKey::Title).to_string(),
                            subtitle: last_updated,
                        }
                        Button {
                            class: "secondary outline",
                            busy: button_busy,
                            on_click: move |_| refresh(),
                            "↻ {t(locale, MessageKey::Refresh)}"
                        }
                    }
                    div {
                        style: "flex: 1; overflow-y: auto; min-height: 0; overscroll-behavior-y: contain;",
                        ontouchstart: move |evt| {
                            if let Some(y) = first_touch_y(&evt) {
                                gesture.with_mut(|g| g.start(y));
                            }
                        },
                        ontouchmove: move |evt| {
                            if let Some(y) = first_touch_y(&evt) {
                                gesture.with_mut(|g| g.track(y));
                            }
                        },
                        ontouchend: move |_| {
                            if gesture.with_mut(|g| g.release()) {
                                refresh();
                            }
                        },
                        ontouchcancel: move |_| {
                            gesture.with_mut(|g| g.release());
                        },
                        if indicator_height > 0.0 {
                            div {
                                style: "display: flex; justify-content: center; height: {indicator_height}px; overflow: hidden;",
                                span {
                                    "aria-busy": indicator_busy,
                                    if !refreshing {
                                        "↓"
                                    }
                                }
                            }
                        }
                        SearchBar {
                            placeholder: t(locale, MessageKey::SearchBar).to_string(),
                            on_change_text: move |text: String| list.with_mut(|l| l.search(&text)),
                        }
                        for (index, record) in rows.iter().enumerate() {
                            div {
                                key: "{record.id}",
                                if index > 0 {
                                    Separator {}
                                }
                                CoinRow {
                                    record: record.clone(),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
