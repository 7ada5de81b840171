//! Server configuration

use chrono_tz::Tz;

/// Report server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | TIMEZONE | UTC | Business timezone for window boundaries |
/// | CURRENCY | USD | Currency code for display totals |
/// | DATA_SNAPSHOT | (unset) | Path to a JSON store snapshot |
/// | LOG_DIR | (unset) | Directory for daily-rolling log files |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 TIMEZONE=Asia/Ho_Chi_Minh CURRENCY=VND cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Business timezone: "today" and day boundaries are evaluated here
    pub timezone: Tz,
    /// Currency code for the report's display totals
    pub currency: String,
    /// Optional JSON snapshot backing the in-memory store
    pub data_snapshot: Option<String>,
    /// Optional log file directory
    pub log_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults; a bad
    /// TIMEZONE value is reported once and replaced with UTC.
    pub fn from_env() -> Self {
        let timezone = match std::env::var("TIMEZONE") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(timezone = %raw, "Unknown TIMEZONE, falling back to UTC");
                chrono_tz::UTC
            }),
            Err(_) => chrono_tz::UTC,
        };

        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone,
            currency: std::env::var("CURRENCY").unwrap_or_else(|_| "USD".into()),
            data_snapshot: std::env::var("DATA_SNAPSHOT").ok().filter(|s| !s.is_empty()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Whether this is a production deployment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
