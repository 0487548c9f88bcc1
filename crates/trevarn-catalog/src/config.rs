//! Catalog configuration: naming convention and the static page tables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Presentation metadata for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Card icon glyph (trusted markup)
    pub icon: String,

    /// English description
    #[serde(default)]
    pub en: String,

    /// French description
    #[serde(default)]
    pub fr: String,
}

impl PageMeta {
    pub fn new(icon: &str, en: &str, fr: &str) -> Self {
        Self {
            icon: icon.to_string(),
            en: en.to_string(),
            fr: fr.to_string(),
        }
    }

    /// Metadata used for documents with no explicit entry.
    pub fn placeholder() -> Self {
        Self::new("•", "", "")
    }

    /// Description in the given language.
    pub fn description(&self, lang: Language) -> &str {
        match lang {
            Language::En => &self.en,
            Language::Fr => &self.fr,
        }
    }
}

/// Naming convention and static tables for the brand catalog.
///
/// Every field falls back to the built-in Trevarn catalog when omitted from
/// the `[catalog]` table of `trevarn.toml`. Tables are replaced wholesale, not
/// merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Brand name stripped from the front of extracted titles
    pub brand: String,

    /// Filename prefix identifying a catalog document
    pub prefix: String,

    /// Document extension, including the dot
    pub extension: String,

    /// Marker inserted after the prefix in French filenames
    pub secondary_marker: String,

    /// Canonical display order
    pub order: Vec<String>,

    /// French titles keyed by English filename
    pub titles_fr: BTreeMap<String, String>,

    /// Card metadata keyed by English filename
    pub meta: BTreeMap<String, PageMeta>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        let order = [
            "trevarn-name.html",
            "trevarn-origins.html",
            "trevarn-logo-mark.html",
            "trevarn-colour-palette.html",
            "trevarn-typography.html",
            "trevarn-usage.html",
        ];

        let titles_fr = [
            ("trevarn-name.html", "Le Nom"),
            ("trevarn-origins.html", "Origines de la Marque"),
            ("trevarn-logo-mark.html", "La Marque"),
            ("trevarn-colour-palette.html", "Palette de Couleurs"),
            ("trevarn-typography.html", "Typographie"),
            ("trevarn-usage.html", "Utilisation"),
        ];

        let meta = [
            (
                "trevarn-name.html",
                PageMeta::new(
                    "Aa",
                    "Etymology, pronunciation, and the Cornish-Breton linguistic heritage behind the name.",
                    "Étymologie, prononciation et héritage linguistique cornouaillais-breton du nom.",
                ),
            ),
            (
                "trevarn-origins.html",
                PageMeta::new(
                    "◈",
                    "From Carnac menhirs to Vera Molnár's algorithmic art — the visual DNA of the mark.",
                    "Des menhirs de Carnac à l'art algorithmique de Vera Molnár — l'ADN visuel de la marque.",
                ),
            ),
            (
                "trevarn-logo-mark.html",
                PageMeta::new(
                    "△",
                    "Primary and secondary marks, variants, background treatments, and favicon specifications.",
                    "Marques primaire et secondaire, variantes, traitements de fond et spécifications favicon.",
                ),
            ),
            (
                "trevarn-colour-palette.html",
                PageMeta::new(
                    "●",
                    "Aour Glaz, Aour Balan, and the complete colour system with accessibility guidance.",
                    "Aour Glaz, Aour Balan et le système de couleurs complet avec conseils d'accessibilité.",
                ),
            ),
            (
                "trevarn-typography.html",
                PageMeta::new(
                    "Tt",
                    "IBM Plex Sans for display, Inter for body — the type system and specifications.",
                    "IBM Plex Sans pour les titres, Inter pour le corps — le système typographique.",
                ),
            ),
            (
                "trevarn-usage.html",
                PageMeta::new(
                    "☰",
                    "Lockups, clear space, minimum sizes, brand voice, and usage guidelines.",
                    "Compositions, espaces de protection, tailles minimales, ton de marque et directives.",
                ),
            ),
        ];

        Self {
            brand: "Trevarn".to_string(),
            prefix: "trevarn-".to_string(),
            extension: ".html".to_string(),
            secondary_marker: "fr-".to_string(),
            order: order.iter().map(|s| s.to_string()).collect(),
            titles_fr: titles_fr
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            meta: meta
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }
}
