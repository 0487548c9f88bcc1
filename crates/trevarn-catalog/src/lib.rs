//! Page discovery for the Trevarn brand site.
//!
//! Scans the served directory for brand documents, resolves a display title
//! for each one, orders them by the canonical catalog sequence and maps each
//! filename to its presentation metadata.

pub mod catalog;
pub mod config;
pub mod language;
pub mod ordering;
pub mod scanner;
pub mod title;

pub use catalog::{Catalog, CatalogError};
pub use config::{CatalogConfig, PageMeta};
pub use language::{Language, ParseLanguageError};
pub use ordering::order_pages;
pub use scanner::{discover_pages, scan_pages, PageEntry, ScanError};
pub use title::{extract_title, fallback_title, TitleError};
