//! Defines the locales the UI has translations for.

use serde::Deserialize;
use serde::Serialize;
use std::env;
use std::str::FromStr;

/// A UI language, identified by its ISO 639-1 code.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    De,
    Fr,
    Es,
}

impl Locale {
    /// Parses a POSIX style language tag such as `de_DE.UTF-8` or `fr-CA`.
    ///
    /// Only the language part is considered. Returns `None` for unknown
    /// languages and for the `C`/`POSIX` locales.
    pub fn from_lang_tag(tag: &str) -> Option<Self> {
        let language = tag
            .split(['_', '-', '.', '@'])
            .next()
            .unwrap_or_default();
        Self::from_str(language).ok()
    }

    /// Reads `COINWATCH_LOCALE`, then `LANG`, falling back to English.
    pub fn from_env() -> Self {
        env::var("COINWATCH_LOCALE")
            .ok()
            .and_then(|s| Self::from_lang_tag(&s))
            .or_else(|| env::var("LANG").ok().and_then(|s| Self::from_lang_tag(&s)))
            .unwrap_or_default()
    }

    /// The lowercase language code, e.g. `"de"`.
    pub fn code(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lang_tag() {
        assert_eq!(Locale::from_lang_tag("de_DE.UTF-8"), Some(Locale::De));
        assert_eq!(Locale::from_lang_tag("fr-CA"), Some(Locale::Fr));
        assert_eq!(Locale::from_lang_tag("ES"), Some(Locale::Es));
        assert_eq!(Locale::from_lang_tag("en"), Some(Locale::En));
        assert_eq!(Locale::from_lang_tag("C"), None);
        assert_eq!(Locale::from_lang_tag("ja_JP.UTF-8"), None);
        assert_eq!(Locale::from_lang_tag(""), None);
    }

    #[test]
    fn test_code() {
        assert_eq!(Locale::De.code(), "de");
        assert_eq!(Locale::default().code(), "en");
    }
}
