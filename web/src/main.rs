use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting coinwatch web");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
