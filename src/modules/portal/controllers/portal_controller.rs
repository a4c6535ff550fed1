use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::portal::services::PortalCatalog;

/// GET /api/portal - Full portal document with defaults applied
#[tracing::instrument(skip(catalog))]
pub async fn get_portal(catalog: web::Data<PortalCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.document())
}

/// GET /api/portal/departments - Section summaries
#[tracing::instrument(skip(catalog))]
pub async fn list_departments(catalog: web::Data<PortalCatalog>) -> HttpResponse {
    HttpResponse::Ok().json(catalog.sections())
}

/// GET /api/portal/departments/{name}/apps - Resolved app cards of one section
#[tracing::instrument(skip(catalog))]
pub async fn list_department_apps(
    catalog: web::Data<PortalCatalog>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let section = path.into_inner();
    let apps = catalog.apps_in(&section)?;
    Ok(HttpResponse::Ok().json(apps))
}

/// Configure portal routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/portal")
            .route("", web::get().to(get_portal))
            .route("/departments", web::get().to(list_departments))
            .route("/departments/{name}/apps", web::get().to(list_department_apps)),
    );
}
