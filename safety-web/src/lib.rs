#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod dom;
pub mod logging;
pub mod text;

/// Re-export of the core crate under the name the UI code uses.
pub use safety_game as game;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(dom::query_flag("debug"));
    yew::Renderer::<app::App>::new().render();
}
