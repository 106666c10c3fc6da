//! HTTP server for the payroll engine.
//!
//! Reads the configuration directory from `BORDRO_CONFIG_DIR` (default
//! `./config/tr`) and listens on `BORDRO_BIND_ADDR` (default
//! `127.0.0.1:3000`). Log filtering follows `RUST_LOG`.

use std::env;

use bordro_engine::api::{AppState, ENGINE_VERSION, create_router};
use bordro_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/tr";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_dir = env::var("BORDRO_CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let bind_addr = env::var("BORDRO_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

    let config = match ConfigLoader::load(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load configuration");
            std::process::exit(1);
        }
    };
    info!(
        config_dir = %config_dir,
        rule_set = %config.metadata().name,
        "Configuration loaded"
    );

    let router = create_router(AppState::new(config));

    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(bind_addr = %bind_addr, error = %err, "Failed to bind");
            std::process::exit(1);
        }
    };

    info!(bind_addr = %bind_addr, version = ENGINE_VERSION, "bordro-engine listening");
    if let Err(err) = axum::serve(listener, router).await {
        error!(error = %err, "Server error");
        std::process::exit(1);
    }
}
