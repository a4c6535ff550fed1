use serde::{Deserialize, Serialize};

/// Optional operator overrides, one per tunable.
///
/// `None` means "not supplied". Zero is representable so that the resolver,
/// not the caller, decides what an unusable value means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcurrencyOverrides {
    pub workers: Option<usize>,
    pub workers_per_core: Option<usize>,
    pub threads: Option<usize>,
    pub max_connections: Option<usize>,
}

impl ConcurrencyOverrides {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    pub fn with_workers_per_core(mut self, multiplier: usize) -> Self {
        self.workers_per_core = Some(multiplier);
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_max_connections(mut self, max_connections: usize) -> Self {
        self.max_connections = Some(max_connections);
        self
    }
}

/// Everything the resolver looks at. Gathered once at the startup boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverInputs {
    /// Logical CPUs reported by the host; `0` signals a failed query
    pub cpu_count: usize,
    pub overrides: ConcurrencyOverrides,
}

impl ResolverInputs {
    pub fn new(cpu_count: usize, overrides: ConcurrencyOverrides) -> Self {
        Self {
            cpu_count,
            overrides,
        }
    }
}

/// Final worker/thread/connection sizing handed to the HTTP server at launch.
///
/// Every field is at least 1. Values are fixed for the lifetime of the
/// process; a restart is required to pick up new overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConcurrencyConfig {
    pub worker_count: usize,
    pub thread_count: usize,
    pub connection_limit: usize,
}

impl ResolvedConcurrencyConfig {
    /// Render as pre-fork process manager flags (gunicorn-compatible names)
    pub fn to_process_manager_args(&self, bind_address: &str) -> Vec<String> {
        vec![
            "--workers".to_string(),
            self.worker_count.to_string(),
            "--threads".to_string(),
            self.thread_count.to_string(),
            "--worker-connections".to_string(),
            self.connection_limit.to_string(),
            "--bind".to_string(),
            bind_address.to_string(),
        ]
    }
}
