// Portal document loading: defaults, fallback document and rejection of
// malformed input

#[path = "../helpers/mod.rs"]
mod helpers;

use ai_portal::core::AppError;
use ai_portal::portal::services::builtin_document;
use ai_portal::portal::{PortalCatalog, PortalLoader};
use helpers::{write_portal_file, SAMPLE_PORTAL_YAML};

#[test]
fn test_loads_sample_document() {
    let (_dir, path) = write_portal_file(SAMPLE_PORTAL_YAML);

    let document = PortalLoader::load(&path).unwrap();

    assert_eq!(document.title, "Acme AI Portal");
    assert_eq!(document.company.name, "Acme");
    assert_eq!(document.user.role, "Analyst");
    assert_eq!(document.departments.len(), 2);
    assert_eq!(document.departments[1].icon, "fa-solid fa-folder");
    assert_eq!(document.shared.title(), "Everyone");
    // header fields the file left out are filled in
    assert_eq!(document.shared.icon(), "fa-solid fa-share-nodes");
    assert_eq!(document.app_store.title(), "AI App Store");
}

#[test]
fn test_missing_file_falls_back_to_builtin_document() {
    let dir = tempfile::tempdir().unwrap();

    let document = PortalLoader::load(dir.path().join("absent.yaml")).unwrap();

    assert_eq!(document, builtin_document());
}

#[test]
fn test_missing_sections_take_defaults() {
    let (_dir, path) = write_portal_file("title: Minimal\n");

    let document = PortalLoader::load(&path).unwrap();

    assert_eq!(document.title, "Minimal");
    assert_eq!(document.company.name, "Enterprise");
    assert_eq!(document.company.theme_color.as_deref(), Some("#4a6fa5"));
    assert!(document.departments.is_empty());
}

#[test]
fn test_malformed_yaml_is_configuration_error() {
    let (_dir, path) = write_portal_file("departments: [\n  - name: Finance\n");

    let err = PortalLoader::load(&path).unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
    assert!(err.to_string().contains("ai-portal.yaml"));
}

#[test]
fn test_department_without_name_is_rejected() {
    let (_dir, path) = write_portal_file("departments:\n  - icon: fa-solid fa-coins\n");

    assert!(matches!(
        PortalLoader::load(&path),
        Err(AppError::Configuration(_))
    ));
}

#[test]
fn test_catalog_resolves_cards_from_sample() {
    let document = PortalLoader::parse(SAMPLE_PORTAL_YAML).unwrap();
    let catalog = PortalCatalog::new(document);

    let finance = catalog.apps_in("Finance").unwrap();
    assert_eq!(finance[0].icon_color, "#43A047");
    assert_eq!(
        finance[0].contact_href.as_deref(),
        Some("mailto:fin-ai@acme.example")
    );
    assert_eq!(finance[1].icon_color, "#1B5E20");
    assert_eq!(finance[1].icon, "fa-solid fa-cube");
    assert_eq!(
        finance[1].contact_href.as_deref(),
        Some("https://wiki.acme.example/expense")
    );

    let hr = catalog.apps_in("human-resources").unwrap();
    // no department color, so the company theme applies
    assert_eq!(hr[0].icon_color, "#336699");
    assert_eq!(hr[0].launch_url, None);
    assert_eq!(hr[0].contact_href.as_deref(), Some("mailto:hr-ai@acme.example"));
}
