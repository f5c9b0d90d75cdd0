//! Lifetime-free Dioxus wrappers for the Pico.css elements the app uses.
//! Pico is linked from the application root.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    /// Pico modifier classes, e.g. `"secondary outline"`.
    #[props(default)]
    class: &'static str,
    #[props(default = false)]
    busy: bool,
}

/// A button. While `busy` it shows Pico's inline spinner and ignores clicks.
pub fn Button(props: ButtonProps) -> Element {
    let aria_busy = if props.busy { "true" } else { "false" };
    rsx! {
        button {
            class: props.class,
            "aria-busy": aria_busy,
            disabled: props.busy,
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}
