//! Parcel Gateway entry point.
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌──────────────┐
//! │  Config  │───▶│   Gateway    │───▶│   Carrier    │
//! │  (YAML)  │    │ (axum + map) │    │  (reqwest)   │
//! └──────────┘    └──────────────┘    └──────────────┘
//! ```

use std::sync::Arc;

use parcel_gateway::carrier::CarrierClient;
use parcel_gateway::config::AppConfig;
use parcel_gateway::gateway::{self, state::AppState};
use parcel_gateway::logging::init_logging;
use parcel_gateway::token_store::MemoryTokenStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() {
    let config = AppConfig::load(&get_env());
    let _guard = init_logging(&config);

    let carrier = match CarrierClient::new(&config.carrier) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ FATAL: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(base_url = %config.carrier.base_url, "carrier client ready");

    let state = Arc::new(AppState::new(carrier, Arc::new(MemoryTokenStore::new())));

    let port = get_port_override().unwrap_or(config.gateway.port);
    gateway::run_server(&config.gateway.host, port, state).await;
}
