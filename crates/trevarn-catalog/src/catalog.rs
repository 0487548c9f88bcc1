//! Compiled, read-only view of the catalog configuration.

use regex::Regex;

use crate::config::{CatalogConfig, PageMeta};
use crate::language::Language;

/// Errors raised when a catalog configuration cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid catalog configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to compile title pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// The catalog tables plus everything derived from them once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,

    /// Prefix of French documents, e.g. `trevarn-fr-`
    secondary_prefix: String,

    /// Matches a leading `Brand —` in extracted titles
    brand_prefix: Regex,

    placeholder: PageMeta,
}

impl Catalog {
    /// Validate a configuration and compile its derived patterns.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        if config.prefix.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "prefix must not be empty".to_string(),
            ));
        }
        if config.extension.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "extension must not be empty".to_string(),
            ));
        }
        if config.secondary_marker.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "secondary_marker must not be empty".to_string(),
            ));
        }

        let brand_prefix = Regex::new(&format!(
            r"^{}\s*[—–-]\s*",
            regex::escape(&config.brand)
        ))?;

        Ok(Self {
            secondary_prefix: format!("{}{}", config.prefix, config.secondary_marker),
            brand_prefix,
            placeholder: PageMeta::placeholder(),
            config,
        })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Whether `name` is a primary catalog document.
    ///
    /// French files carry the secondary prefix and are never cataloged on
    /// their own.
    pub fn is_document(&self, name: &str) -> bool {
        name.starts_with(&self.config.prefix)
            && name.ends_with(&self.config.extension)
            && name.len() >= self.config.prefix.len() + self.config.extension.len()
            && !name.starts_with(&self.secondary_prefix)
    }

    /// Presentation metadata for a document, or the placeholder.
    pub fn metadata(&self, filename: &str) -> &PageMeta {
        self.config.meta.get(filename).unwrap_or(&self.placeholder)
    }

    /// French title override for a document.
    pub fn secondary_title(&self, filename: &str) -> Option<&str> {
        self.config.titles_fr.get(filename).map(String::as_str)
    }

    /// Canonical display order.
    pub fn order(&self) -> &[String] {
        &self.config.order
    }

    /// Filename of a document in the given language.
    ///
    /// `trevarn-name.html` becomes `trevarn-fr-name.html` in French.
    pub fn localized_filename(&self, lang: Language, filename: &str) -> String {
        match lang {
            Language::En => filename.to_string(),
            Language::Fr => match filename.strip_prefix(&self.config.prefix) {
                Some(rest) => format!("{}{}", self.secondary_prefix, rest),
                None => filename.to_string(),
            },
        }
    }

    /// Link target for a document on the given language's index.
    pub fn href(&self, lang: Language, filename: &str) -> String {
        format!(
            "{}{}",
            lang.root_path(),
            self.localized_filename(lang, filename)
        )
    }

    /// Remove a leading `Brand —` (em dash, en dash or hyphen) from a title.
    pub fn strip_brand<'a>(&self, title: &'a str) -> &'a str {
        match self.brand_prefix.find(title) {
            Some(m) => &title[m.end()..],
            None => title,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(CatalogConfig::default()).expect("built-in catalog is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_primary_documents_only() {
        let catalog = Catalog::default();

        assert!(catalog.is_document("trevarn-name.html"));
        assert!(catalog.is_document("trevarn-anything-new.html"));
        assert!(!catalog.is_document("trevarn-fr-name.html"));
        assert!(!catalog.is_document("trevarn-name.pdf"));
        assert!(!catalog.is_document("index.html"));
        assert!(!catalog.is_document("favicon.svg"));
    }

    #[test]
    fn unknown_metadata_is_placeholder() {
        let catalog = Catalog::default();

        let meta = catalog.metadata("trevarn-unknown.html");

        assert_eq!(meta, &PageMeta::placeholder());
        assert_eq!(meta.icon, "•");
        assert_eq!(meta.en, "");
        assert_eq!(meta.fr, "");
    }

    #[test]
    fn known_metadata() {
        let catalog = Catalog::default();

        assert_eq!(catalog.metadata("trevarn-typography.html").icon, "Tt");
    }

    #[test]
    fn localizes_links() {
        let catalog = Catalog::default();

        assert_eq!(
            catalog.href(Language::En, "trevarn-name.html"),
            "/trevarn-name.html"
        );
        assert_eq!(
            catalog.href(Language::Fr, "trevarn-logo-mark.html"),
            "/FR/trevarn-fr-logo-mark.html"
        );
    }

    #[test]
    fn strips_brand_with_any_dash() {
        let catalog = Catalog::default();

        assert_eq!(catalog.strip_brand("Trevarn — Le Nom"), "Le Nom");
        assert_eq!(catalog.strip_brand("Trevarn – Usage"), "Usage");
        assert_eq!(catalog.strip_brand("Trevarn-Usage"), "Usage");
        assert_eq!(catalog.strip_brand("Colour Trevarn — X"), "Colour Trevarn — X");
    }

    #[test]
    fn rejects_empty_prefix() {
        let config = CatalogConfig {
            prefix: String::new(),
            ..Default::default()
        };

        assert!(matches!(
            Catalog::new(config),
            Err(CatalogError::InvalidConfig(_))
        ));
    }
}
