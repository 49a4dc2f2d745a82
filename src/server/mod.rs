// Server module entry point
// Listener construction and per-connection handling

pub mod connection;
pub mod listener;

// Re-export commonly used functions
pub use connection::accept_connection;
pub use listener::create_listener;
