//! Centralized configuration (environment variables + defaults).

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Loads `.env` if present. Call once at process start.
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Database URL (optional).
///
/// When unset the server falls back to the in-memory store.
pub fn database_url() -> Option<String> {
    std::env::var("DATABASE_URL")
        .ok()
        .filter(|v| !v.trim().is_empty())
}

/// Maximum pool connections (default 5).
pub fn max_connections() -> anyhow::Result<u32> {
    match std::env::var("DATABASE_MAX_CONNECTIONS") {
        Ok(v) => {
            let n = v
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS must be a valid u32, got '{}'", v))?;
            Ok(n.max(1))
        }
        Err(_) => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

/// Address the API server listens on.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
}

/// Log filter directive, `RUST_LOG` style.
pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
}
