//! Tripple Host Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod content;
mod context;
mod dom;
mod error;
mod forms;
mod gate;
mod models;
mod query;
mod service;
mod session;
mod settings;
mod store;

use std::sync::Arc;

use app::App;
use config::{AppConfig, BackendKind};
use leptos::prelude::*;
use rolling_logger::LoggerConfig;
use service::{BridgeService, MemoryService, RemoteService};
use session::Session;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_problem) = AppConfig::load();
    if let Err(e) = rolling_logger::init_logger_or_default(LoggerConfig {
        level: config.log_level.clone(),
        capacity: config.log_buffer_lines,
    }) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    if let Some(problem) = config_problem {
        rolling_logger::warn(&problem);
    }

    let service: Arc<dyn RemoteService> = match config.backend {
        BackendKind::Bridge => Arc::new(BridgeService),
        BackendKind::Memory => Arc::new(MemoryService::new()),
    };
    let session = Session::new(service, config.stale_window());
    rolling_logger::info(&format!("starting with {:?} backend", config.backend));

    mount_to_body(move || view! { <App config=config session=session /> });
}
