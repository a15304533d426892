//! Shopping List Frontend Entry Point

mod app;
mod catalog;
mod celebrate;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod list;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::embedded() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    logging::init(config.log_level);
    if let Some(err) = config_error {
        log::warn!("falling back to built-in configuration: {}", err);
    }
    log::info!(
        "catalog loaded: {} shops, {} categories",
        config.catalog.shops.len(),
        config.catalog.categories.len()
    );

    mount_to_body(move || view! { <App config=config /> });
}
