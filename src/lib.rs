//! Enterprise AI Portal
//!
//! Serves the departmental AI application directory as JSON and sizes its
//! own worker pool from the host CPU count and operator overrides.

pub mod cli;
pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;
pub mod server;
pub mod telemetry;

// Re-export commonly used types
pub use modules::concurrency;
pub use modules::portal;
