//! Application settings loaded from environment variables.
//!
//! Settings come from the process environment (optionally populated from a
//! `.env` file by the binary before this module runs). Every setting has a
//! sensible local-development default so the service starts with no
//! configuration at all.

use crate::errors::Result;
use std::net::SocketAddr;

/// Default `SQLite` database location, created on first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://data/casetrace.sqlite?mode=rwc";
/// Default listen address for the HTTP API.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection URL handed to the database layer
    pub database_url: String,
    /// Socket address the HTTP server binds to
    pub bind_addr: SocketAddr,
}

/// Loads the application configuration from the environment.
///
/// Reads `DATABASE_URL` and `BIND_ADDR`, falling back to local defaults when
/// unset. Fails only if a supplied `BIND_ADDR` cannot be parsed as a socket
/// address.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let bind_addr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse::<SocketAddr>()?;

    tracing::debug!(%database_url, %bind_addr, "resolved application configuration");

    Ok(AppConfig {
        database_url,
        bind_addr,
    })
}
