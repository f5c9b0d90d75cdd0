// File: src/components/common.rs
//! Small building blocks shared by screens.

use dioxus::prelude::*;

use crate::theme::TAB_BACKGROUND_COLOR;

/// The shared screen header: a title with a muted subtitle line beneath it.
#[component]
pub fn Header(title: String, subtitle: String) -> Element {
    rsx! {
        hgroup {
            style: "margin: 0 0 0.5rem 0; text-align: center;",
            h3 {
                style: "margin-bottom: 0.1rem;",
                "{title}"
            }
            p {
                style: "color: var(--pico-muted-color); font-size: 0.8rem;",
                "{subtitle}"
            }
        }
    }
}

/// A centered, busy indicator filling the available space.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            style: "flex: 1; display: flex; flex-direction: column; justify-content: center; align-items: center;",
            span {
                "aria-busy": "true",
            }
        }
    }
}

/// A 1px divider between list rows.
#[component]
pub fn Separator() -> Element {
    rsx! {
        div {
            style: "height: 1px; background-color: {TAB_BACKGROUND_COLOR};",
        }
    }
}
