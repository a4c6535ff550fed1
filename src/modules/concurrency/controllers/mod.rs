pub mod concurrency_controller;

pub use concurrency_controller::configure;
