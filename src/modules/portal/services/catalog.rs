use std::sync::Arc;

use crate::core::error::AppError;
use crate::modules::portal::models::{
    slugify, AppCard, AppEntry, PortalDocument, SectionSummary, APP_STORE_SECTION,
    DEFAULT_THEME_COLOR, SHARED_SECTION,
};

/// Read-only view over the loaded portal document.
///
/// Cheap to clone; every worker shares the same document.
#[derive(Debug, Clone)]
pub struct PortalCatalog {
    document: Arc<PortalDocument>,
}

struct SectionRef<'a> {
    name: &'a str,
    title: &'a str,
    icon: &'a str,
    description: &'a str,
    apps: &'a [AppEntry],
}

impl PortalCatalog {
    pub fn new(document: PortalDocument) -> Self {
        Self {
            document: Arc::new(document),
        }
    }

    pub fn document(&self) -> &PortalDocument {
        &self.document
    }

    /// Departments in document order, then shared apps, then the app store
    pub fn sections(&self) -> Vec<SectionSummary> {
        self.section_refs()
            .map(|section| SectionSummary {
                name: section.name.to_string(),
                slug: slugify(section.name),
                title: section.title.to_string(),
                icon: section.icon.to_string(),
                description: section.description.to_string(),
                color: self.section_color(section.name).to_string(),
                app_count: section.apps.len(),
            })
            .collect()
    }

    /// Apps of a section, looked up by name or slug (case-insensitive)
    pub fn apps_in(&self, section: &str) -> Result<Vec<AppCard>, AppError> {
        let wanted = slugify(section);
        let found = self
            .section_refs()
            .find(|s| slugify(s.name) == wanted)
            .ok_or_else(|| AppError::not_found(format!("section '{}'", section)))?;

        Ok(found
            .apps
            .iter()
            .map(|app| AppCard {
                name: app.name.clone(),
                description: app.description.clone(),
                icon: app.icon_or_default().to_string(),
                icon_color: self.icon_color(found.name, &app.name).to_string(),
                launch_url: app.launch_url().map(str::to_string),
                contact_href: app.has_contact_info().then(|| app.contact_href()),
            })
            .collect())
    }

    /// App override, then section color, then company theme, then the
    /// `default` entry of `department_colors`, then the built-in color.
    pub fn icon_color(&self, section: &str, app_name: &str) -> &str {
        self.document
            .app_icon_colors
            .get(app_name)
            .map(String::as_str)
            .unwrap_or_else(|| self.section_color(section))
    }

    pub fn section_color(&self, section: &str) -> &str {
        let doc = &self.document;
        doc.department_colors
            .get(section)
            .or(doc.company.theme_color.as_ref())
            .or(doc.department_colors.get("default"))
            .map(String::as_str)
            .unwrap_or(DEFAULT_THEME_COLOR)
    }

    fn section_refs(&self) -> impl Iterator<Item = SectionRef<'_>> {
        let doc = &*self.document;
        let departments = doc.departments.iter().map(|dept| SectionRef {
            name: &dept.name,
            title: &dept.name,
            icon: &dept.icon,
            description: &dept.description,
            apps: &dept.apps,
        });
        let extras = [
            (SHARED_SECTION, &doc.shared),
            (APP_STORE_SECTION, &doc.app_store),
        ]
        .into_iter()
        .map(|(name, section)| SectionRef {
            name,
            title: section.title(),
            icon: section.icon(),
            description: section.description(),
            apps: &section.apps,
        });

        departments.chain(extras)
    }
}
