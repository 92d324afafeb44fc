//! chateaud - Chateau chat gateway daemon
//!
//! Accepts RFC 1459 clients, registers them through NICK/PASS against a
//! pluggable authentication agent, and keeps a slot open for XMPP.

mod auth;
mod config;
mod error;
mod handlers;
mod network;
mod state;
mod telemetry;

use crate::config::Config;
use crate::handlers::Registry;
use crate::network::Gateway;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    if let Err(errors) = config::validate(&config) {
        for e in &errors {
            error!(error = %e, "Invalid configuration");
        }
        anyhow::bail!(
            "{} configuration error(s) in {}",
            errors.len(),
            config_path
        );
    }

    info!(
        server = %config.server.name,
        listeners = config.listen.len(),
        max_line_len = config.limits.max_line_len,
        "Starting chateaud"
    );

    let auth = auth::from_config(&config.auth);
    let registry = Arc::new(Registry::new());

    let gateway = Gateway::bind(
        &config.listen,
        config.limits.max_line_len,
        auth,
        registry,
    )
    .map_err(|e| {
        error!(error = %e, "Failed to bind listener");
        e
    })?;

    gateway.run().await.map_err(|e| {
        error!(error = %e, "Gateway stopped");
        e
    })
}
