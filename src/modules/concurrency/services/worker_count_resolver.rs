use crate::core::error::AppError;
use crate::modules::concurrency::models::{ResolvedConcurrencyConfig, ResolverInputs};

/// Threads per worker when no override is supplied
pub const DEFAULT_THREAD_COUNT: usize = 1;

/// Concurrent connections per worker when no override is supplied
pub const DEFAULT_CONNECTION_LIMIT: usize = 100;

/// Worker count used when the host CPU query fails
pub const FALLBACK_WORKER_COUNT: usize = 1;

/// WorkerCountResolver turns host signals and operator overrides into the
/// concurrency sizing for the HTTP server.
///
/// Worker policy, first match wins:
/// 1. explicit worker count
/// 2. failed CPU query (`cpu_count == 0`) degrades to [`FALLBACK_WORKER_COUNT`]
/// 3. `max(1, cpu_count * workers_per_core)`
/// 4. `cpu_count + 1`
pub struct WorkerCountResolver;

impl WorkerCountResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, inputs: &ResolverInputs) -> Result<ResolvedConcurrencyConfig, AppError> {
        let overrides = &inputs.overrides;

        let worker_count = self.resolve_worker_count(inputs)?;
        let thread_count = require_positive("thread count", overrides.threads)?
            .unwrap_or(DEFAULT_THREAD_COUNT);
        let connection_limit = require_positive("connection limit", overrides.max_connections)?
            .unwrap_or(DEFAULT_CONNECTION_LIMIT);

        let resolved = ResolvedConcurrencyConfig {
            worker_count,
            thread_count,
            connection_limit,
        };

        tracing::debug!(
            cpu_count = inputs.cpu_count,
            worker_count = resolved.worker_count,
            thread_count = resolved.thread_count,
            connection_limit = resolved.connection_limit,
            "Resolved concurrency configuration"
        );

        Ok(resolved)
    }

    fn resolve_worker_count(&self, inputs: &ResolverInputs) -> Result<usize, AppError> {
        let overrides = &inputs.overrides;

        // Validate both up front so a bad multiplier is reported even when
        // an explicit count shadows it.
        let explicit = require_positive("worker count", overrides.workers)?;
        let multiplier = require_positive("workers per core", overrides.workers_per_core)?;

        if let Some(workers) = explicit {
            if multiplier.is_some() {
                tracing::info!(
                    workers,
                    "Explicit worker count overrides workers-per-core multiplier"
                );
            }
            return Ok(workers);
        }

        if inputs.cpu_count == 0 {
            tracing::warn!(
                fallback = FALLBACK_WORKER_COUNT,
                "CPU count unavailable, degrading to fallback worker count"
            );
            return Ok(FALLBACK_WORKER_COUNT);
        }

        let workers = match multiplier {
            Some(multiplier) => inputs.cpu_count.saturating_mul(multiplier).max(1),
            None => inputs.cpu_count.saturating_add(1),
        };

        Ok(workers)
    }
}

impl Default for WorkerCountResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper around [`WorkerCountResolver::resolve`]
pub fn resolve(inputs: &ResolverInputs) -> Result<ResolvedConcurrencyConfig, AppError> {
    WorkerCountResolver::new().resolve(inputs)
}

fn require_positive(name: &str, value: Option<usize>) -> Result<Option<usize>, AppError> {
    match value {
        Some(0) => Err(AppError::configuration(format!(
            "{} must be greater than 0",
            name
        ))),
        other => Ok(other),
    }
}
