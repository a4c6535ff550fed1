use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::modules::portal::services::PortalCatalog;

/// Health check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub portal: String,
    pub application: String,
}

/// Readiness check response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: ReadinessChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessChecks {
    pub portal: bool,
    pub sections: usize,
    pub apps: usize,
}

/// GET /health - Liveness check
/// Returns 200 if the application is alive (can respond to requests)
/// Does not check dependencies
pub async fn health_check() -> impl Responder {
    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        checks: HealthChecks {
            portal: "not_checked".to_string(),
            application: "healthy".to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}

/// GET /ready - Readiness check
/// Returns 200 once a portal catalog with at least one launchable app is registered
pub async fn readiness_check(req: HttpRequest) -> impl Responder {
    let catalog = req.app_data::<web::Data<PortalCatalog>>();
    let sections = catalog.map(|c| c.sections()).unwrap_or_default();

    let checks = ReadinessChecks {
        portal: catalog.is_some(),
        sections: sections.len(),
        apps: sections.iter().map(|s| s.app_count).sum(),
    };
    let ready = checks.portal && checks.apps > 0;

    if !checks.portal {
        tracing::error!("Readiness check failed: portal catalog not registered");
    } else if !ready {
        tracing::error!("Readiness check failed: portal catalog has no apps");
    }

    let response = ReadinessResponse { ready, checks };

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ready", web::get().to(readiness_check));
}
