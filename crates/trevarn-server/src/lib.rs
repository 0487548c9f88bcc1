//! HTTP server for the Trevarn brand site.
//!
//! Serves the generated English and French index pages and every other file
//! in the site directory as-is.

pub mod cache;
pub mod routes;
pub mod server;
pub mod watcher;

pub use cache::ScanCache;
pub use routes::Route;
pub use server::{router, ServerError, SiteServer, SiteServerConfig, SiteState};
pub use watcher::{FileWatcher, WatchEvent};
