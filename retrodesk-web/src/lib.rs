#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod announce;
pub mod app;
pub mod components;
pub mod dom;
pub mod logging;
pub mod media;
pub mod pages;
pub mod paths;
pub mod router;
pub mod site;
pub mod storage;
pub mod timer;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);
    // Stored theme/content go onto <body> before the first render
    site::bootstrap::apply_initial_attributes();
    yew::Renderer::<app::App>::new().render();
}
