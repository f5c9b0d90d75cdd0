use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting coinwatch mobile");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
