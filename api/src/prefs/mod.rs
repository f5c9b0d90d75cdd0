pub mod locale;
pub mod user_prefs;
