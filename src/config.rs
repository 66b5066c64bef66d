//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub listen_port: u16,

    /// Address the HTTP server binds to.
    #[serde(default = "default_host")]
    pub listen_host: String,

    /// Debug mode: lowers the default log filter to debug.
    /// Never changes request semantics.
    #[serde(default)]
    pub debug_mode: bool,

    // === Simulated Work ===
    /// Delay applied to each /analyze request, in milliseconds.
    #[serde(default = "default_analyze_delay_ms")]
    pub analyze_delay_ms: u64,

    /// Delay applied to each /optimize request, in milliseconds.
    #[serde(default = "default_optimize_delay_ms")]
    pub optimize_delay_ms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_port() -> u16 {
    5000
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_analyze_delay_ms() -> u64 {
    1000
}

fn default_optimize_delay_ms() -> u64 {
    2000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.listen_host.parse::<IpAddr>().is_err() {
            return Err(format!(
                "LISTEN_HOST must be an IP address, got {:?}",
                self.listen_host
            ));
        }

        if self.listen_port == 0 {
            return Err("LISTEN_PORT must be nonzero".to_string());
        }

        Ok(())
    }

    /// The socket address to bind. Call [`Config::validate`] first;
    /// an unparseable host falls back to all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        let host: IpAddr = self
            .listen_host
            .parse()
            .unwrap_or_else(|_| IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(host, self.listen_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_port: default_port(),
            listen_host: default_host(),
            debug_mode: false,
            analyze_delay_ms: default_analyze_delay_ms(),
            optimize_delay_ms: default_optimize_delay_ms(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
