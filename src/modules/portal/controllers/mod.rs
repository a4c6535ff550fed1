pub mod portal_controller;

pub use portal_controller::configure;
