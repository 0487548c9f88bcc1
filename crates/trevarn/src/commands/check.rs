//! Report missing French documents.
//!
//! The server answers a missing French page with a plain 404; this command is
//! the way to find them ahead of time.

use std::path::{Path, PathBuf};

use anyhow::Result;
use trevarn_catalog::{discover_pages, Catalog, Language};

use crate::config::ConfigFile;

/// A cataloged document and the French file it links to.
#[derive(Debug, PartialEq, Eq)]
struct Counterpart {
    filename: String,
    french: String,
    present: bool,
}

fn counterparts(root: &Path, catalog: &Catalog) -> Result<Vec<Counterpart>> {
    let pages = discover_pages(root, Language::Fr, catalog)?;

    Ok(pages
        .into_iter()
        .map(|page| {
            let french = catalog.localized_filename(Language::Fr, &page.filename);
            let present = root.join(&french).is_file();
            Counterpart {
                filename: page.filename,
                french,
                present,
            }
        })
        .collect())
}

/// Run the check command.
pub async fn run(file_config: ConfigFile, dir: Option<PathBuf>) -> Result<()> {
    let catalog = file_config.catalog()?;
    let root = file_config.site_dir(dir);

    let results = counterparts(&root, &catalog)?;
    let missing = results.iter().filter(|c| !c.present).count();

    for c in &results {
        if c.present {
            tracing::info!("ok       {} -> {}", c.filename, c.french);
        } else {
            tracing::warn!("missing  {} -> {}", c.filename, c.french);
        }
    }

    if missing > 0 {
        anyhow::bail!(
            "{} of {} documents have no French counterpart",
            missing,
            results.len()
        );
    }

    tracing::info!("All {} documents have French counterparts", results.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn finds_missing_counterparts() {
        let temp = tempdir().unwrap();
        for name in [
            "trevarn-name.html",
            "trevarn-fr-name.html",
            "trevarn-usage.html",
        ] {
            fs::write(temp.path().join(name), "").unwrap();
        }

        let results = counterparts(temp.path(), &Catalog::default()).unwrap();

        assert_eq!(
            results,
            vec![
                Counterpart {
                    filename: "trevarn-name.html".to_string(),
                    french: "trevarn-fr-name.html".to_string(),
                    present: true,
                },
                Counterpart {
                    filename: "trevarn-usage.html".to_string(),
                    french: "trevarn-fr-usage.html".to_string(),
                    present: false,
                },
            ]
        );
    }

    #[tokio::test]
    async fn fails_when_any_is_missing() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("trevarn-name.html"), "").unwrap();

        let result = run(ConfigFile::default(), Some(temp.path().to_path_buf())).await;

        assert!(result.is_err());
    }
}
