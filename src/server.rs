use actix_cors::Cors;
use actix_web::{http::header, web};

use crate::middleware::json_config;
use crate::modules;
use crate::modules::concurrency::ResolvedConcurrencyConfig;
use crate::modules::portal::PortalCatalog;

/// Shared state and routes for one worker's `App`.
///
/// `serve` and the integration tests build their apps through this so the
/// route table cannot drift between them.
pub fn app_config(
    catalog: web::Data<PortalCatalog>,
    resolved: web::Data<ResolvedConcurrencyConfig>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(catalog)
            .app_data(resolved)
            .app_data(json_config())
            .configure(modules::configure);
    }
}

/// CORS policy for the SPA front ends
pub fn build_cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(3600)
}
