use actix_web::{web, HttpResponse, Responder};

use crate::modules::concurrency::models::ResolvedConcurrencyConfig;

/// GET /api/runtime/concurrency - Sizing this process was started with
pub async fn get_concurrency(resolved: web::Data<ResolvedConcurrencyConfig>) -> impl Responder {
    HttpResponse::Ok().json(resolved.get_ref())
}

/// Configure runtime introspection routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/runtime").route("/concurrency", web::get().to(get_concurrency)),
    );
}
