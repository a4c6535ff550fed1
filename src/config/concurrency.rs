use crate::core::{AppError, Result};
use crate::modules::concurrency::ConcurrencyOverrides;
use std::num::IntErrorKind;

pub const WORKERS_VAR: &str = "PORTAL_WORKERS";
pub const WORKERS_PER_CORE_VAR: &str = "PORTAL_WORKERS_PER_CORE";
pub const THREADS_VAR: &str = "PORTAL_THREADS";
pub const MAX_CONNECTIONS_VAR: &str = "PORTAL_MAX_CONNECTIONS";

impl ConcurrencyOverrides {
    /// Read overrides through `lookup`. Unset or blank keys are absent;
    /// anything else must be a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            workers: parse_override(WORKERS_VAR, lookup(WORKERS_VAR))?,
            workers_per_core: parse_override(WORKERS_PER_CORE_VAR, lookup(WORKERS_PER_CORE_VAR))?,
            threads: parse_override(THREADS_VAR, lookup(THREADS_VAR))?,
            max_connections: parse_override(MAX_CONNECTIONS_VAR, lookup(MAX_CONNECTIONS_VAR))?,
        })
    }
}

/// Parse one override value.
///
/// Parsed as a signed integer first so that `-2` is reported as
/// non-positive rather than non-numeric.
pub fn parse_override(name: &str, raw: Option<String>) -> Result<Option<usize>> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(None),
    };

    let value: i64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
        let reason = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "is out of range",
            _ => "is not an integer",
        };
        AppError::Configuration(format!("Invalid {}: {:?} {}", name, raw, reason))
    })?;

    if value <= 0 {
        return Err(AppError::Configuration(format!(
            "Invalid {}: must be greater than 0, got {}",
            name, value
        )));
    }

    usize::try_from(value)
        .map(Some)
        .map_err(|_| AppError::Configuration(format!("Invalid {}: {} is out of range", name, value)))
}
