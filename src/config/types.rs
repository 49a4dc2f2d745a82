// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub page: PageConfig,
    pub static_files: StaticConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Page content configuration
///
/// The rendered page is otherwise static; these fields are the only
/// values substituted into the template.
#[derive(Debug, Deserialize, Clone)]
pub struct PageConfig {
    pub title: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Name of the embedded template to render
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_template() -> String {
    "index.html".to_string()
}

/// Static asset serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct StaticConfig {
    /// URL prefix under which embedded assets are exposed
    pub route_prefix: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log format (combined, common, or json)
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
}

fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}
