// Configuration module entry point
// Manages application configuration and shared runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, LoggingConfig, PageConfig, PerformanceConfig, ServerConfig, StaticConfig,
};

/// Default page title, matching the bundled workshop page
const DEFAULT_TITLE: &str =
    "Welcome to the Gitex Asia Workshop — Multi‑Tenancy Powered by Loft Labs";

impl Config {
    /// Load configuration from the default `config.toml` location
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Sources are layered: built-in defaults, then the optional config
    /// file, then `ONEPAGE_*` environment variables. The plain `PORT`
    /// environment variable overrides `server.port` last.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("ONEPAGE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("page.title", DEFAULT_TITLE)?
            .set_default("static_files.route_prefix", "/static/")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_override_option("server.port", port_from_env()?)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

/// Read the `PORT` environment variable, if set
///
/// A set but unparseable value is a startup error rather than being
/// silently ignored.
fn port_from_env() -> Result<Option<i64>, config::ConfigError> {
    match std::env::var("PORT") {
        Ok(value) => parse_port(&value)
            .map(|p| Some(i64::from(p)))
            .map_err(config::ConfigError::Message),
        Err(_) => Ok(None),
    }
}

fn parse_port(value: &str) -> Result<u16, String> {
    value
        .parse::<u16>()
        .map_err(|e| format!("Invalid PORT value '{value}': {e}"))
}
