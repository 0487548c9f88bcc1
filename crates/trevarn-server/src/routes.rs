//! Request path classification.

use trevarn_catalog::Language;

/// What to do with a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Render the index page in the given language
    Index(Language),

    /// Serve a file from the site directory at this root-relative path
    Static(String),
}

impl Route {
    /// Classify a request path. The first matching rule wins.
    ///
    /// French document links live under `/FR/`, but the files themselves sit
    /// in the site root, so only the final path segment is kept.
    pub fn classify(path: &str) -> Route {
        match path {
            "/" | "/index.html" => Route::Index(Language::En),
            "/FR" | "/FR/" | "/fr" | "/fr/" => Route::Index(Language::Fr),
            _ if path.starts_with("/FR/") || path.starts_with("/fr/") => {
                let filename = path.rsplit('/').next().unwrap_or_default();
                Route::Static(format!("/{}", filename))
            }
            _ => Route::Static(path.to_string()),
        }
    }
}
