// HTTP contract of the portal JSON API, exercised in-process with the same
// route table the server uses.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{test, App};
use ai_portal::concurrency::ResolvedConcurrencyConfig;
use ai_portal::middleware::RequestId;
use ai_portal::portal::{AppCard, PortalDocument, PortalLoader, SectionSummary};
use helpers::{portal_app, portal_app_with, test_concurrency, SAMPLE_PORTAL_YAML};
use serde_json::Value;

fn sample_document() -> PortalDocument {
    PortalLoader::parse(SAMPLE_PORTAL_YAML).unwrap()
}

#[actix_web::test]
async fn test_get_portal_returns_document() {
    let app =
        test::init_service(App::new().wrap(RequestId).configure(portal_app(sample_document())))
            .await;

    let req = test::TestRequest::get().uri("/api/portal").to_request();
    let body: PortalDocument = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, sample_document());
}

#[actix_web::test]
async fn test_list_departments() {
    let app = test::init_service(App::new().configure(portal_app(sample_document()))).await;

    let req = test::TestRequest::get()
        .uri("/api/portal/departments")
        .to_request();
    let body: Vec<SectionSummary> = test::call_and_read_body_json(&app, req).await;

    let slugs: Vec<_> = body.iter().map(|s| s.slug.as_str()).collect();
    assert_eq!(slugs, vec!["finance", "human-resources", "shared", "app-store"]);
    assert_eq!(body[0].color, "#43A047");
    assert_eq!(body[2].title, "Everyone");
    assert_eq!(body[3].app_count, 1);
}

#[actix_web::test]
async fn test_list_department_apps() {
    let app = test::init_service(App::new().configure(portal_app(sample_document()))).await;

    let req = test::TestRequest::get()
        .uri("/api/portal/departments/Finance/apps")
        .to_request();
    let body: Vec<AppCard> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.len(), 2);
    assert_eq!(body[0].name, "Financial Forecasting");
    assert_eq!(
        body[0].launch_url.as_deref(),
        Some("https://forecast.acme.example")
    );
}

#[actix_web::test]
async fn test_app_store_section_by_slug() {
    let app = test::init_service(App::new().configure(portal_app(sample_document()))).await;

    let req = test::TestRequest::get()
        .uri("/api/portal/departments/app-store/apps")
        .to_request();
    let body: Vec<AppCard> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.len(), 1);
    assert_eq!(body[0].name, "Image Generator");
}

#[actix_web::test]
async fn test_unknown_department_uses_error_envelope() {
    let app = test::init_service(App::new().configure(portal_app(sample_document()))).await;

    let req = test::TestRequest::get()
        .uri("/api/portal/departments/legal/apps")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"]["code"], 404);
}

#[actix_web::test]
async fn test_runtime_concurrency_endpoint() {
    let resolved = ResolvedConcurrencyConfig {
        worker_count: 9,
        thread_count: 2,
        connection_limit: 250,
    };
    let app =
        test::init_service(App::new().configure(portal_app_with(sample_document(), resolved)))
            .await;

    let req = test::TestRequest::get()
        .uri("/api/runtime/concurrency")
        .to_request();
    let body: ResolvedConcurrencyConfig = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body, resolved);
    assert_ne!(body, test_concurrency());
}

#[actix_web::test]
async fn test_activity_malformed_body_is_400() {
    let app = test::init_service(App::new().configure(portal_app(sample_document()))).await;

    let req = test::TestRequest::post()
        .uri("/api/activity")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"action": "launch_app"}"#)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("target"));
}

#[actix_web::test]
async fn test_health_and_ready() {
    let app = test::init_service(App::new().configure(portal_app(sample_document()))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    let req = test::TestRequest::get().uri("/ready").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ready"], true);
    assert_eq!(body["checks"]["sections"], 4);
}
