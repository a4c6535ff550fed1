use crate::core::{AppError, Result};
use crate::modules::concurrency::{
    resolve, ConcurrencyOverrides, ResolvedConcurrencyConfig, ResolverInputs,
};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub mod concurrency;
pub mod server;

pub use server::ServerConfig;

pub const DEFAULT_PORTAL_CONFIG_PATH: &str = "ai-portal.yaml";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub concurrency: ConcurrencyOverrides,
    pub portal: PortalConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Single origin allowed to call the API; `None` allows any origin
    pub cors_allowed_origin: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub config_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Configuration(format!(
                "Invalid LOG_FORMAT: {} (expected text or json)",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config = Config {
            app: AppConfig {
                env: non_blank("APP_ENV").unwrap_or_else(|| "development".to_string()),
                log_level: non_blank("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format: match non_blank("LOG_FORMAT") {
                    Some(raw) => raw.parse()?,
                    None => LogFormat::Text,
                },
                cors_allowed_origin: non_blank("CORS_ALLOWED_ORIGIN"),
            },
            server: ServerConfig::from_lookup(&lookup)?,
            concurrency: ConcurrencyOverrides::from_lookup(&lookup)?,
            portal: PortalConfig {
                config_path: non_blank("PORTAL_CONFIG_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PORTAL_CONFIG_PATH)),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.contains(char::is_whitespace) {
            return Err(AppError::Configuration(format!(
                "HOST must not contain whitespace: {:?}",
                self.server.host
            )));
        }

        if let Some(origin) = &self.app.cors_allowed_origin {
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(AppError::Configuration(format!(
                    "CORS_ALLOWED_ORIGIN must be an http(s) origin, got {}",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Size the worker pool for this host
    pub fn resolve_concurrency(&self, cpu_count: usize) -> Result<ResolvedConcurrencyConfig> {
        resolve(&ResolverInputs::new(cpu_count, self.concurrency))
    }
}
