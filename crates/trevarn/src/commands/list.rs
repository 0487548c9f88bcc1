//! Print the discovered catalog.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use trevarn_catalog::{discover_pages, Catalog, Language};

use crate::config::ConfigFile;

/// One card of the index, as listed on the command line.
#[derive(Debug, Serialize)]
struct ListedPage {
    number: usize,
    filename: String,
    title: String,
    href: String,
    icon: String,
    description: String,
}

fn listed_pages(root: &Path, lang: Language, catalog: &Catalog) -> Result<Vec<ListedPage>> {
    let pages = discover_pages(root, lang, catalog)?;

    Ok(pages
        .into_iter()
        .enumerate()
        .map(|(i, page)| {
            let meta = catalog.metadata(&page.filename);
            ListedPage {
                number: i + 1,
                href: catalog.href(lang, &page.filename),
                icon: meta.icon.clone(),
                description: meta.description(lang).to_string(),
                filename: page.filename,
                title: page.title,
            }
        })
        .collect())
}

fn format_table(pages: &[ListedPage]) -> String {
    let width = pages.iter().map(|p| p.filename.len()).max().unwrap_or(0);

    pages
        .iter()
        .map(|p| format!("{:02}  {:<width$}  {}\n", p.number, p.filename, p.title))
        .collect()
}

/// Run the list command.
pub async fn run(
    file_config: ConfigFile,
    lang: Language,
    dir: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let catalog = file_config.catalog()?;
    let root = file_config.site_dir(dir);

    let pages = listed_pages(&root, lang, &catalog)?;

    if json {
        let out = serde_json::to_string_pretty(&pages).context("Failed to serialize catalog")?;
        println!("{}", out);
    } else {
        print!("{}", format_table(&pages));
        tracing::info!("{} {} pages in {}", pages.len(), lang, root.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn lists_pages_in_display_order() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("trevarn-usage.html"), "").unwrap();
        fs::write(temp.path().join("trevarn-name.html"), "").unwrap();

        let pages = listed_pages(temp.path(), Language::Fr, &Catalog::default()).unwrap();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title, "Le Nom");
        assert_eq!(pages[0].href, "/FR/trevarn-fr-name.html");
        assert_eq!(pages[1].number, 2);
        assert_eq!(pages[1].icon, "☰");

        let table = format_table(&pages);
        assert_eq!(
            table,
            "01  trevarn-name.html   Le Nom\n02  trevarn-usage.html  Utilisation\n"
        );
    }

    #[test]
    fn serializes_to_json() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("trevarn-name.html"), "").unwrap();

        let pages = listed_pages(temp.path(), Language::En, &Catalog::default()).unwrap();
        let json = serde_json::to_value(&pages).unwrap();

        assert_eq!(json[0]["filename"], "trevarn-name.html");
        assert_eq!(json[0]["title"], "Trevarn Name");
        assert_eq!(json[0]["href"], "/trevarn-name.html");
    }
}
