// ============================================================================
// NEXUS WEB - sign-in, sign-up, dashboard and post creation (Yew)
// ============================================================================
// Layers:
// - models: wire types shared with the backend
// - stores / services: localStorage session and HTTP API
// - state: pure UI state machines and form validation
// - hooks / components / views: Yew rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod stores;
pub mod utils;
pub mod views;

use wasm_logger::Config;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on `<body>`.
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 Nexus starting ({}, API {})",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    yew::Renderer::<App>::new().render();
}
