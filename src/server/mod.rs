//! Server module
//!
//! Listener creation and the accept loop. The process binds one port for its
//! entire lifetime; there is no graceful shutdown or restart handling.

mod connection;
pub mod listener;

use crate::config::Config;
use crate::logger;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Accept loop: one spawned task per connection, until the process exits.
pub async fn run(listener: TcpListener, cfg: Arc<Config>) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, peer_addr)) => {
                connection::handle_connection(stream, peer_addr, Arc::clone(&cfg));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}
