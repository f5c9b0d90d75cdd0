// File: src/components/search_bar.rs
use dioxus::prelude::*;

use crate::theme::TAB_BACKGROUND_COLOR;

#[derive(PartialEq, Clone, Props)]
pub struct SearchBarProps {
    placeholder: String,
    /// Called with the full box text after every edit.
    on_change_text: EventHandler<String>,
}

/// A rounded search input, rendered as the list's header element.
#[component]
pub fn SearchBar(props: SearchBarProps) -> Element {
    rsx! {
        input {
            r#type: "search",
            style: "border-radius: 2rem; margin: 0.5rem 0; border-color: {TAB_BACKGROUND_COLOR};",
            placeholder: "{props.placeholder}",
            "aria-label": "{props.placeholder}",
            autocomplete: "off",
            oninput: move |evt| props.on_change_text.call(evt.value()),
        }
    }
}
