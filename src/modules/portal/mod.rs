pub mod controllers;
pub mod models;
pub mod services;

pub use models::{AppCard, AppEntry, PortalDocument, SectionSummary};
pub use services::{PortalCatalog, PortalLoader};
