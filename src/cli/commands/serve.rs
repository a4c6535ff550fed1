use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};

use crate::config::Config;
use crate::core::detect_cpu_count;
use crate::middleware::RequestId;
use crate::modules::portal::{PortalCatalog, PortalLoader};
use crate::server::{app_config, build_cors};

/// Resolve sizing, load the portal document and run the HTTP server
pub async fn serve_command(config: Config) -> Result<()> {
    let cpu_count = detect_cpu_count();
    let resolved = config
        .resolve_concurrency(cpu_count)
        .context("Failed to resolve concurrency")?;

    let document = PortalLoader::load(&config.portal.config_path)
        .context("Failed to load portal configuration")?;
    let catalog = web::Data::new(PortalCatalog::new(document));
    let resolved_data = web::Data::new(resolved);

    tracing::info!("Starting Enterprise AI Portal");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!(
        cpu_count,
        worker_count = resolved.worker_count,
        thread_count = resolved.thread_count,
        connection_limit = resolved.connection_limit,
        "Concurrency resolved"
    );

    let bind_address = config.server.bind_address();
    let cors_origin = config.app.cors_allowed_origin.clone();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(cors_origin.as_deref()))
            .wrap(RequestId)
            .configure(app_config(catalog.clone(), resolved_data.clone()))
    })
    .workers(resolved.worker_count)
    .max_connections(resolved.connection_limit)
    .worker_max_blocking_threads(resolved.thread_count)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await.context("HTTP server terminated with an error")
}
