//! Content Hub search page entry point

#[cfg(any(feature = "web", feature = "desktop"))]
use content_hub::app::App;

// Browser build
#[cfg(all(feature = "web", target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Content Hub search initialized".into());
    dioxus::launch(App);
}

// Desktop build
#[cfg(all(feature = "desktop", not(target_arch = "wasm32")))]
fn main() {
    content_hub::shared::logging::init_tracing();
    tracing::info!("Starting Content Hub search...");
    dioxus::launch(App);
}

// No renderer selected
#[cfg(not(any(
    all(feature = "web", target_arch = "wasm32"),
    all(feature = "desktop", not(target_arch = "wasm32"))
)))]
fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    content_hub::shared::logging::init_tracing();
    tracing::warn!("No renderer feature enabled; build with `--features web` or `--features desktop`");
}
