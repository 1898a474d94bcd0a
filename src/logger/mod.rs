//! Logger module
//!
//! Logging utilities for the asset server:
//! - Server lifecycle logging
//! - Access logging (Common Log Format or Apache combined)
//! - Error and warning logging
//!
//! Everything goes to stdout/stderr; the deployment environment captures the
//! process streams.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("TrackFlow asset server started");
    println!("Listening on: http://{addr}");
    println!("Serving build directory: {}", config.build_dir);
    println!("SPA fallback document: {}", config.index_file);
    if config.access_log {
        println!("Access log format: {}", config.access_log_format);
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

/// Log a formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    println!("{}", entry.format(format));
}
