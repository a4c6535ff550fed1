pub mod json_errors;
pub mod request_id;

pub use json_errors::{json_config, json_error_handler};
pub use request_id::{RequestId, RequestIdValue};
