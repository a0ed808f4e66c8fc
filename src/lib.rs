pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod forms;
pub mod models;
pub mod pages;
pub mod session;
pub mod utils;
pub mod voice;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    utils::panic_hook::init();
    leptos::mount_to_body(App);
}
