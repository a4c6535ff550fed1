pub mod app_entry;
pub mod portal_document;

pub use app_entry::{AppCard, AppEntry};
pub use portal_document::{
    slugify, AppSection, CompanyInfo, Department, PortalDocument, SectionSummary, UserInfo,
    APP_STORE_SECTION, DEFAULT_THEME_COLOR, SHARED_SECTION,
};
