//! Localized UI strings.

use api::prefs::locale::Locale;

/// Keys of the messages the UI displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum MessageKey {
    /// Title shown in the currency list header.
    Title,
    /// Placeholder of the currency search box.
    SearchBar,
    /// Label of the refresh button.
    Refresh,
    /// Label of the currency list tab.
    CurrenciesTab,
}

/// Looks up the message for `key` in `locale`.
pub fn t(locale: Locale, key: MessageKey) -> &'static str {
    use MessageKey::*;

    match (locale, key) {
        (Locale::En, Title) => "Cryptocurrencies",
        (Locale::En, SearchBar) => "Search...",
        (Locale::En, Refresh) => "Refresh",
        (Locale::En, CurrenciesTab) => "Currencies",

        (Locale::De, Title) => "Kryptowährungen",
        (Locale::De, SearchBar) => "Suchen...",
        (Locale::De, Refresh) => "Aktualisieren",
        (Locale::De, CurrenciesTab) => "Währungen",

        (Locale::Fr, Title) => "Cryptomonnaies",
        (Locale::Fr, SearchBar) => "Rechercher...",
        (Locale::Fr, Refresh) => "Actualiser",
        (Locale::Fr, CurrenciesTab) => "Devises",

        (Locale::Es, Title) => "Criptomonedas",
        (Locale::Es, SearchBar) => "Buscar...",
        (Locale::Es, Refresh) => "Actualizar",
        (Locale::Es, CurrenciesTab) => "Monedas",
    }
}
