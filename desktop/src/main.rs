use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    dioxus_logger::init(level).expect("failed to init logger");
    info!("starting coinwatch desktop");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
