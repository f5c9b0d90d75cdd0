// The client-side Dioxus application logic.

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

mod actions;
pub mod compat;
mod components;
pub mod currency_list;
mod format;
pub mod i18n;
pub mod navigation;
pub mod pull_to_refresh;
mod screens;
pub mod store;
mod theme;

use api::prefs::locale::Locale;
use api::prefs::user_prefs::UserPrefs;
use components::pico::Container;
use i18n::{t, MessageKey};
use navigation::NavigationOptions;
use screens::currencies::CurrenciesScreen;
use store::{AppStore, CoinState};
use theme::{TAB_ACTIVE_TINT, TAB_BACKGROUND_COLOR, TAB_INACTIVE_TINT};

/// How often the shell refreshes the store in the background.
const BACKGROUND_REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(60);

/// Enum to represent the different screens hosted by the tab bar.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
enum Screen {
    #[default]
    Currencies,
}

impl Screen {
    /// Helper to get the localized tab label for each screen.
    fn name(&self, locale: Locale) -> &'static str {
        match self {
            Screen::Currencies => t(locale, MessageKey::CurrenciesTab),
        }
    }

    fn navigation_options(&self) -> NavigationOptions {
        match self {
            Screen::Currencies => screens::currencies::NAVIGATION_OPTIONS,
        }
    }
}

/// A list of all available screens for easy iteration.
const ALL_SCREENS: [Screen; 1] = [Screen::Currencies];

/// The bottom tab bar. The active tab's icon and label get the active tint.
#[component]
fn TabBar(mut active_screen: Signal<Screen>, locale: Locale) -> Element {
    rsx! {
        nav {
            class: "tab-bar",
            for screen in ALL_SCREENS {
                {
                    let icon = screen.navigation_options().tab_bar_icon;
                    let is_active = *active_screen.read() == screen;
                    let tint = if is_active { TAB_ACTIVE_TINT } else { TAB_INACTIVE_TINT };
                    let aria_current = if is_active { "page" } else { "false" };
                    rsx! {
                        a {
                            href: "#",
                            style: "color: {tint};",
                            "aria-current": aria_current,
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            span {
                                style: "font-size: {icon.size}px; line-height: 1;",
                                "{icon.glyph()}"
                            }
                            small {
                                "{screen.name(locale)}"
                            }
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = format!(
        r#"
    * {{ box-sizing: border-box; }}

    html, body {{
        height: 100%;
        width: 100%;
        margin: 0;
        padding: 0;
        overflow: hidden;
    }}

    /* --- APP FRAME --- */
    .app-main-container {{
        position: fixed;
        top: 0; left: 0; right: 0; bottom: 0;
        display: flex;
        flex-direction: column;
        overflow: hidden;
    }}

    .app-main-container > main {{
        flex: 1;
        display: flex;
        flex-direction: column;
        min-height: 0;
        overflow: hidden;
        padding: 0.5rem 1rem 0 1rem;
    }}

    /* --- TAB BAR --- */
    .tab-bar {{
        flex-shrink: 0;
        display: flex;
        justify-content: space-around;
        background-color: {TAB_BACKGROUND_COLOR};
        padding: 0.4rem 0 calc(0.4rem + env(safe-area-inset-bottom)) 0;
    }}

    .tab-bar a {{
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 0.2rem;
        text-decoration: none;
    }}
"#
    );

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0, viewport-fit=cover",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let prefs_future = use_server_future(move || async move {
        api::get_user_prefs().await.map_err(|e| e.to_string())
    })?;

    let body = match &*prefs_future.read() {
        Some(Ok(prefs)) => {
            info!("prefs: {:?}", prefs);
            rsx! {
                LoadedApp {
                    user_prefs: *prefs,
                }
            }
        }
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        None => rsx! {
            p {
                "aria-busy": "true",
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when prefs are ready.
#[component]
fn LoadedApp(user_prefs: UserPrefs) -> Element {
    use_context_provider(|| user_prefs);

    let coin_state = use_signal(CoinState::default);
    let store = use_context_provider(|| AppStore::new(coin_state));

    // Background store updates. Screens see them like any other store change.
    use_coroutine(move |_rx: UnboundedReceiver<()>| async move {
        loop {
            compat::sleep(BACKGROUND_REFRESH_INTERVAL).await;
            if let Err(e) = actions::fetch_coin_data(store).await {
                warn!("background currency refresh failed: {}", e);
            }
        }
    });

    let active_screen = use_signal(Screen::default);
    let locale = user_prefs.locale();
    let options = active_screen().navigation_options();

    rsx! {
        div {
            class: "app-main-container",
            lang: locale.code(),
            if options.header_shown {
                header {
                    h1 {
                        style: "margin: 0.5rem 1rem; font-size: 1.5rem;",
                        "{active_screen().name(locale)}"
                    }
                }
            }
            Container {
                match active_screen() {
                    Screen::Currencies => rsx! {
                        CurrenciesScreen {}
                    },
                }
            }
            TabBar {
                active_screen,
                locale,
            }
        }
    }
}
