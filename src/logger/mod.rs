//! Logger module
//!
//! Logging utilities for the server: lifecycle messages, access logging
//! in several formats, and error/warning logging. Access and lifecycle
//! messages go to stdout, errors and warnings to stderr.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Server started successfully");
    println!("Listening on: http://{addr}");
    println!("Page title: {}", config.page.title);
    println!("Static prefix: {}", config.static_files.route_prefix);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("======================================\n");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}

pub fn log_shutdown() {
    println!("\n[Shutdown] Ctrl+C received, stopping server");
}
