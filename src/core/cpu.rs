//! Host CPU detection used to size the worker pool.

/// Number of logical CPUs visible to this process.
///
/// `num_cpus` already honours cgroup quotas, so containers report their
/// limit rather than the host's core count. A zero return is passed through
/// untouched; the resolver owns the fallback policy.
pub fn detect_cpu_count() -> usize {
    let count = num_cpus::get();
    if count == 0 {
        tracing::warn!("CPU count query returned zero");
    }
    count
}
