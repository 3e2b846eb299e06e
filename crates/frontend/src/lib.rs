pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // nível de log vem de config.toml
    _ = console_log::init_with_level(config::config().log.level_filter());
    console_error_panic_hook::set_once();

    log::info!("API: {}", shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
