use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::core::detect_cpu_count;
use crate::modules::concurrency::ResolvedConcurrencyConfig;

#[derive(Debug, Serialize)]
struct ResolveReport<'a> {
    cpu_count: usize,
    #[serde(flatten)]
    resolved: &'a ResolvedConcurrencyConfig,
    bind: String,
}

/// Resolve sizing and print it for an external process manager
pub fn resolve_command(config: &Config, format: OutputFormat, cpus: Option<usize>) -> Result<()> {
    let cpu_count = cpus.unwrap_or_else(detect_cpu_count);
    let resolved = config
        .resolve_concurrency(cpu_count)
        .context("Failed to resolve concurrency")?;

    println!("{}", render(config, cpu_count, &resolved, format)?);
    Ok(())
}

pub fn render(
    config: &Config,
    cpu_count: usize,
    resolved: &ResolvedConcurrencyConfig,
    format: OutputFormat,
) -> Result<String> {
    let bind = config.server.bind_address();

    match format {
        OutputFormat::Flags => Ok(resolved.to_process_manager_args(&bind).join(" ")),
        OutputFormat::Json => {
            let report = ResolveReport {
                cpu_count,
                resolved,
                bind,
            };
            serde_json::to_string_pretty(&report).context("Failed to encode report")
        }
    }
}
