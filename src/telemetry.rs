use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `LOG_LEVEL`. Logs go to stderr so `resolve` output
/// on stdout stays machine-readable.
pub fn init_tracing(app: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(&app.log_level).into());

    let registry = tracing_subscriber::registry().with(filter);

    let result = match app.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("tracing subscriber already installed: {}", e);
    }
}

fn default_filter(level: &str) -> String {
    format!("ai_portal={level},ai_portal_activity=info,actix_web=info,actix_server=info")
}
