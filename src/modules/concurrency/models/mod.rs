pub mod resolved_config;

pub use resolved_config::{ConcurrencyOverrides, ResolvedConcurrencyConfig, ResolverInputs};
