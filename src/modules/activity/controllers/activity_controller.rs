use actix_web::{web, HttpResponse};

use crate::core::Result;
use crate::modules::activity::models::{ActivityEvent, ActivityReceipt};

/// Tracing target for user activity. Events share the main log output;
/// select them with `RUST_LOG=ai_portal_activity=info`.
pub const ACTIVITY_TARGET: &str = "ai_portal_activity";

/// POST /api/activity - Record a user activity event
pub async fn record_activity(event: web::Json<ActivityEvent>) -> Result<HttpResponse> {
    let event = event.into_inner();
    event.validate()?;

    let details = event
        .details
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_default();

    tracing::info!(
        target: ACTIVITY_TARGET,
        user = %event.user_name,
        action = %event.action,
        target_name = %event.target,
        url = event.url.as_deref().unwrap_or(""),
        details = %details,
        "User activity"
    );

    Ok(HttpResponse::Accepted().json(ActivityReceipt {
        recorded: true,
        recorded_at: chrono::Utc::now().to_rfc3339(),
    }))
}

/// Configure activity routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/activity", web::post().to(record_activity));
}
