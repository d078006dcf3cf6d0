#![allow(warnings)]
//! wp-press Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod hooks;
mod logging;
mod pages;
mod routes;
mod store;

use app::App;
use leptos::prelude::*;
use wp_rest::ApiConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(e) => (ApiConfig::default(), Some(e)),
    };
    logging::init(config.log_level());
    if let Some(e) = config_error {
        log::warn!("[config] {}", e);
    }
    log::info!("[APP] using WordPress at {}", config.base_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
