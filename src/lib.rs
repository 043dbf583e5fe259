pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod proto;
pub mod upstream;

// Re-export key functions for convenience
pub use app::{create_server, init_tracing};
pub use handlers::JokeLookupHandler;
