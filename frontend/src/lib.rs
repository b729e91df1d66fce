pub mod assets;
pub mod components;
mod logging;
pub mod pages;
pub mod router;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    logging::init();
    log::info!("Starting musicRitmo frontend (wasm)");
    router::mount_app();
}
