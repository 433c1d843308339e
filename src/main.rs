mod api;
mod app;
mod components;
mod config;
mod error;
mod format;
mod forms;
mod logging;
mod models;
mod pages;
mod services;
mod session;

use app::{App, AppProps};
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    logging::init(config.level_filter());
    log::info!("starting against {}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
