use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::app_entry::AppEntry;

pub const DEFAULT_THEME_COLOR: &str = "#4a6fa5";
pub const DEFAULT_DEPARTMENT_ICON: &str = "fa-solid fa-folder";
pub const SHARED_SECTION: &str = "Shared";
pub const APP_STORE_SECTION: &str = "App Store";

/// Root of the portal configuration document.
///
/// Every section except department and app names is optional. Missing
/// sections take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalDocument {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub company: CompanyInfo,
    #[serde(default)]
    pub user: UserInfo,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default = "AppSection::shared")]
    pub shared: AppSection,
    #[serde(default = "AppSection::app_store")]
    pub app_store: AppSection,
    /// Section name to hex color; the `default` key is the global fallback
    #[serde(default)]
    pub department_colors: BTreeMap<String, String>,
    /// App name to hex color, checked before the section color
    #[serde(default)]
    pub app_icon_colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    #[serde(default = "default_company_name")]
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub theme_color: Option<String>,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: default_company_name(),
            logo_url: Some("assets/images/logo.svg".to_string()),
            theme_color: Some(DEFAULT_THEME_COLOR.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default = "default_user_label")]
    pub name: String,
    #[serde(default = "default_user_label")]
    pub role: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Default for UserInfo {
    fn default() -> Self {
        Self {
            name: default_user_label(),
            role: default_user_label(),
            department: None,
            avatar_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    #[serde(default = "default_department_icon")]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

impl Department {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: default_department_icon(),
            description: description.into(),
            apps: Vec::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_app(mut self, app: AppEntry) -> Self {
        self.apps.push(app);
        self
    }
}

/// Titled group of apps that is not a department (shared apps, app store).
///
/// Header fields may be omitted in the document;
/// [`PortalDocument::apply_defaults`] fills them per section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSection {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub apps: Vec<AppEntry>,
}

impl AppSection {
    pub fn shared() -> Self {
        let mut section = Self::default();
        section.fill_missing("Shared Apps", "fa-solid fa-share-nodes", "Cross-departmental AI tools");
        section
    }

    pub fn app_store() -> Self {
        let mut section = Self::default();
        section.fill_missing(
            "AI App Store",
            "fa-solid fa-store",
            "Discover and install the latest AI applications",
        );
        section
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_DEPARTMENT_ICON)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    fn fill_missing(&mut self, title: &str, icon: &str, description: &str) {
        fill(&mut self.title, title);
        fill(&mut self.icon, icon);
        fill(&mut self.description, description);
    }
}

fn fill(field: &mut Option<String>, value: &str) {
    if field.as_deref().map_or(true, |v| v.trim().is_empty()) {
        *field = Some(value.to_string());
    }
}

/// Section colors merged into every loaded document
pub const BUILTIN_DEPARTMENT_COLORS: &[(&str, &str)] = &[
    ("Internal Tools", "#1976D2"),
    ("License Required", "#F57C00"),
];

/// App colors merged into every loaded document
pub const BUILTIN_APP_ICON_COLORS: &[(&str, &str)] = &[
    ("Chat with Documents", "#43A047"),
    ("Compare Documents", "#1B5E20"),
    ("RFP Assistant", "#00796B"),
    ("ChatGPT Enterprise", "#D32F2F"),
    ("Microsoft Copilot", "#0066CC"),
    ("Writer", "#F9A825"),
];

impl PortalDocument {
    /// Fill section headers the document left out and merge the built-in
    /// colors. Entries set by the document are never overwritten.
    pub fn apply_defaults(&mut self) {
        let shared = AppSection::shared();
        let app_store = AppSection::app_store();

        self.shared
            .fill_missing(shared.title(), shared.icon(), shared.description());
        self.app_store
            .fill_missing(app_store.title(), app_store.icon(), app_store.description());

        merge_colors(&mut self.department_colors, BUILTIN_DEPARTMENT_COLORS);
        merge_colors(&mut self.app_icon_colors, BUILTIN_APP_ICON_COLORS);
    }
}

fn merge_colors(target: &mut BTreeMap<String, String>, builtin: &[(&str, &str)]) {
    for (name, color) in builtin {
        target
            .entry((*name).to_string())
            .or_insert_with(|| (*color).to_string());
    }
}

/// Section listing entry returned by `GET /api/portal/departments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub name: String,
    pub slug: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub color: String,
    pub app_count: usize,
}

/// URL-safe identifier: lowercase alphanumerics, every other run of
/// characters collapsed to a single `-`, no leading or trailing `-`
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

fn default_title() -> String {
    "AI Portal".to_string()
}

fn default_company_name() -> String {
    "Enterprise".to_string()
}

fn default_user_label() -> String {
    "User".to_string()
}

fn default_department_icon() -> String {
    DEFAULT_DEPARTMENT_ICON.to_string()
}

impl Default for PortalDocument {
    fn default() -> Self {
        Self {
            title: default_title(),
            company: CompanyInfo::default(),
            user: UserInfo::default(),
            departments: Vec::new(),
            shared: AppSection::shared(),
            app_store: AppSection::app_store(),
            department_colors: BTreeMap::new(),
            app_icon_colors: BTreeMap::new(),
        }
    }
}
