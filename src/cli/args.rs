use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ai-portal")]
#[command(about = "Enterprise AI portal: departmental app directory served as JSON")]
#[command(version)]
pub struct Cli {
    /// Portal configuration document (overrides PORTAL_CONFIG_PATH)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Print the resolved worker/thread/connection sizing and exit
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value = "flags")]
        format: OutputFormat,

        /// Use this CPU count instead of querying the host
        #[arg(long)]
        cpus: Option<usize>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Process manager flags: --workers N --threads T ...
    Flags,
    /// JSON object
    Json,
}
