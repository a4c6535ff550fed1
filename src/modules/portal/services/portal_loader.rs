use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::error::AppError;
use crate::modules::portal::models::{
    slugify, AppEntry, Department, PortalDocument, APP_STORE_SECTION, SHARED_SECTION,
};

/// Reads the portal YAML document once at startup.
///
/// A missing file is not fatal: the portal starts with [`builtin_document`].
/// A present but malformed file is a configuration error.
pub struct PortalLoader;

impl PortalLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<PortalDocument, AppError> {
        let path = path.as_ref();

        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Portal configuration not found, using built-in default"
                );
                return Ok(builtin_document());
            }
            Err(e) => return Err(AppError::Io(e)),
        };

        let document = Self::parse(&raw).map_err(|e| match e {
            AppError::Configuration(msg) => {
                AppError::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;

        tracing::info!(
            path = %path.display(),
            departments = document.departments.len(),
            "Portal configuration loaded"
        );

        Ok(document)
    }

    /// Parse and validate a document held in memory
    pub fn parse(raw: &str) -> Result<PortalDocument, AppError> {
        // An empty file deserializes to null, treat as an empty mapping
        let mut document: PortalDocument = if raw.trim().is_empty() {
            PortalDocument::default()
        } else {
            serde_yaml::from_str(raw).map_err(|e| {
                AppError::Configuration(format!("malformed portal document: {}", e))
            })?
        };

        document.apply_defaults();
        validate(&document)?;

        Ok(document)
    }
}

fn validate(document: &PortalDocument) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for reserved in [SHARED_SECTION, APP_STORE_SECTION] {
        seen.insert(slugify(reserved));
    }

    for department in &document.departments {
        if department.name.trim().is_empty() {
            return Err(AppError::Configuration(
                "department name must not be empty".to_string(),
            ));
        }
        let slug = slugify(&department.name);
        if slug.is_empty() {
            return Err(AppError::Configuration(format!(
                "department name has no URL-safe characters: {:?}",
                department.name
            )));
        }
        if !seen.insert(slug) {
            return Err(AppError::Configuration(format!(
                "duplicate or reserved section name: {}",
                department.name
            )));
        }
        validate_apps(&department.name, &department.apps)?;
    }

    validate_apps(SHARED_SECTION, &document.shared.apps)?;
    validate_apps(APP_STORE_SECTION, &document.app_store.apps)?;

    Ok(())
}

fn validate_apps(section: &str, apps: &[AppEntry]) -> Result<(), AppError> {
    match apps.iter().position(|app| app.name.trim().is_empty()) {
        Some(index) => Err(AppError::Configuration(format!(
            "app #{} in section {} has an empty name",
            index + 1,
            section
        ))),
        None => Ok(()),
    }
}

/// Document served when no configuration file is present
pub fn builtin_document() -> PortalDocument {
    let mut document = PortalDocument::default();

    document.departments = vec![
        Department::new("Internal Tools", "Tools for internal use only")
            .with_icon("fa-solid fa-tools")
            .with_app(
                AppEntry::new(
                    "Chat with Documents",
                    "Chat with your documents using AI assistance",
                )
                .with_icon("fa-solid fa-comments")
                .with_url("/chat-with-documents"),
            )
            .with_app(
                AppEntry::new(
                    "Compare Documents",
                    "Compare two documents and identify differences",
                )
                .with_icon("fa-solid fa-file-contract")
                .with_url("/compare-documents"),
            ),
        Department::new(
            "License Required",
            "These tools require a valid license to use",
        )
        .with_icon("fa-solid fa-key")
        .with_app(
            AppEntry::new(
                "ChatGPT Enterprise",
                "Enterprise-grade AI assistant with advanced capabilities",
            )
            .with_icon("fa-solid fa-robot")
            .with_url("/chatgpt-enterprise"),
        )
        .with_app(
            AppEntry::new(
                "Microsoft Copilot",
                "AI assistant integrated with Microsoft products",
            )
            .with_icon("fa-brands fa-microsoft")
            .with_url("/microsoft-copilot"),
        ),
    ];

    document.apply_defaults();
    document
}
