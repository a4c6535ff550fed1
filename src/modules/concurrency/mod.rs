pub mod controllers;
pub mod models;
pub mod services;

pub use models::{ConcurrencyOverrides, ResolvedConcurrencyConfig, ResolverInputs};
pub use services::{resolve, WorkerCountResolver};
