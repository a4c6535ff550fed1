pub mod catalog;
pub mod portal_loader;

pub use catalog::PortalCatalog;
pub use portal_loader::{builtin_document, PortalLoader};
