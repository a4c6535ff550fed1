pub mod resolve;
pub mod serve;

pub use resolve::{render, resolve_command};
pub use serve::serve_command;
