#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod content;
pub mod highlight;
pub mod motion;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // A second init only fails if a logger is already installed.
    console_log::init_with_level(log::Level::Debug).ok();
    leptos::mount::hydrate_body(App);
}
