// File: src/components/coin_row.rs
use api::currency_record::CurrencyRecord;
use dioxus::prelude::*;

use crate::format::{format_compact_usd, format_percentage, format_usd};
use crate::theme::{PRICE_DOWN_COLOR, PRICE_UP_COLOR};

/// One currency entry: rank, name and symbol on the left, price and 24h change on the right.
#[component]
pub fn CoinRow(record: CurrencyRecord) -> Element {
    let change_color = if record.is_down_24h() {
        PRICE_DOWN_COLOR
    } else {
        PRICE_UP_COLOR
    };
    let change = record
        .percent_change_24h
        .map(format_percentage)
        .unwrap_or_else(|| "N/A".to_string());
    let market_cap = record
        .market_cap_usd
        .map(format_compact_usd)
        .unwrap_or_default();
    let rank = if record.rank > 0 {
        format!("#{}", record.rank)
    } else {
        String::new()
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 0.6rem 0.25rem;",
            div {
                style: "display: flex; align-items: baseline; gap: 0.5rem; min-width: 0;",
                small {
                    style: "color: var(--pico-muted-color); width: 2.5rem;",
                    "{rank}"
                }
                div {
                    strong {
                        "{record.name}"
                    }
                    br {}
                    small {
                        style: "color: var(--pico-muted-color);",
                        "{record.symbol} {market_cap}"
                    }
                }
            }
            div {
                style: "text-align: right; white-space: nowrap;",
                "{format_usd(record.price_usd)}"
                br {}
                small {
                    style: "color: {change_color};",
                    "{change}"
                }
            }
        }
    }
}
