//! Directory scanning for catalog documents.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::catalog::Catalog;
use crate::language::Language;
use crate::ordering::order_pages;
use crate::title::resolve_title;

/// A discovered document and its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    /// English filename, relative to the served directory
    pub filename: String,

    /// Display title in the scanned language
    pub title: String,
}

/// Errors that can occur while scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Failed to read page directory {path}: {message}")]
    ReadDir { path: String, message: String },
}

impl ScanError {
    fn read_dir(path: &Path, message: impl ToString) -> Self {
        ScanError::ReadDir {
            path: path.display().to_string(),
            message: message.to_string(),
        }
    }
}

/// List the catalog documents in `dir` with their titles.
///
/// Entries come back sorted by filename. An unreadable directory is an error;
/// an unreadable document only loses its extracted title.
pub fn scan_pages(
    dir: &Path,
    lang: Language,
    catalog: &Catalog,
) -> Result<Vec<PageEntry>, ScanError> {
    let metadata = fs::metadata(dir).map_err(|e| ScanError::read_dir(dir, e))?;
    if !metadata.is_dir() {
        return Err(ScanError::read_dir(dir, "not a directory"));
    }

    let mut candidates: Vec<(PathBuf, String)> = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(ScanError::read_dir(dir, e)),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            continue;
        };

        if catalog.is_document(name) {
            candidates.push((entry.path().to_path_buf(), name.to_string()));
        }
    }

    let pages: Vec<PageEntry> = candidates
        .into_par_iter()
        .map(|(path, filename)| {
            let title = resolve_title(&path, &filename, lang, catalog);
            PageEntry { filename, title }
        })
        .collect();

    Ok(pages)
}

/// Scan `dir` and arrange the result in canonical display order.
pub fn discover_pages(
    dir: &Path,
    lang: Language,
    catalog: &Catalog,
) -> Result<Vec<PageEntry>, ScanError> {
    let mut pages = scan_pages(dir, lang, catalog)?;
    order_pages(&mut pages, catalog.order());

    tracing::debug!(
        "Discovered {} {} pages in {}",
        pages.len(),
        lang,
        dir.display()
    );

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn filenames(pages: &[PageEntry]) -> Vec<&str> {
        pages.iter().map(|p| p.filename.as_str()).collect()
    }

    #[test]
    fn keeps_only_primary_documents() {
        let temp = tempdir().unwrap();
        for name in [
            "trevarn-name.html",
            "trevarn-fr-name.html",
            "trevarn-usage.html",
            "trevarn-brand-guidelines.pdf",
            "favicon.svg",
            "index.html",
        ] {
            fs::write(temp.path().join(name), "").unwrap();
        }
        fs::create_dir(temp.path().join("trevarn-folder.html")).unwrap();

        let pages = scan_pages(temp.path(), Language::En, &Catalog::default()).unwrap();

        assert_eq!(
            filenames(&pages),
            vec!["trevarn-name.html", "trevarn-usage.html"]
        );
    }

    #[test]
    fn resolves_titles_per_language() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("trevarn-name.html"),
            "<html><head><title>Trevarn — The Name</title></head></html>",
        )
        .unwrap();
        fs::write(temp.path().join("trevarn-origins.html"), "<html></html>").unwrap();

        let catalog = Catalog::default();
        let en = discover_pages(temp.path(), Language::En, &catalog).unwrap();
        let fr = discover_pages(temp.path(), Language::Fr, &catalog).unwrap();

        assert_eq!(
            en,
            vec![
                PageEntry {
                    filename: "trevarn-name.html".to_string(),
                    title: "The Name".to_string(),
                },
                PageEntry {
                    filename: "trevarn-origins.html".to_string(),
                    title: "Trevarn Origins".to_string(),
                },
            ]
        );
        assert_eq!(fr[0].title, "Le Nom");
        assert_eq!(fr[1].title, "Origines de la Marque");
    }

    #[test]
    fn orders_by_catalog_then_filename() {
        let temp = tempdir().unwrap();
        for name in [
            "trevarn-zeta.html",
            "trevarn-usage.html",
            "trevarn-alpha.html",
            "trevarn-name.html",
        ] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let pages = discover_pages(temp.path(), Language::En, &Catalog::default()).unwrap();

        assert_eq!(
            filenames(&pages),
            vec![
                "trevarn-name.html",
                "trevarn-usage.html",
                "trevarn-alpha.html",
                "trevarn-zeta.html",
            ]
        );
    }

    #[test]
    fn empty_directory_yields_no_pages() {
        let temp = tempdir().unwrap();

        let pages = discover_pages(temp.path(), Language::Fr, &Catalog::default()).unwrap();

        assert!(pages.is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let result = scan_pages(&missing, Language::En, &Catalog::default());

        assert!(matches!(result, Err(ScanError::ReadDir { .. })));
    }
}
