//! Display title resolution.
//!
//! Titles come from one of three places: the French override table, the
//! `<title>` element near the top of the document, or the filename itself.
//! Only the filename source is guaranteed, so the other two are attempted and
//! collapsed to it on failure.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::Catalog;
use crate::language::Language;

/// Number of leading bytes searched for a `<title>` element.
pub const TITLE_SCAN_LIMIT: usize = 2048;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title>(.*?)</title>").expect("valid title regex"));

/// Why a title could not be taken from a document.
#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document is not valid UTF-8")]
    Encoding,

    #[error("No <title> element found")]
    NotFound,
}

/// Derive a title from a filename.
///
/// The extension is dropped, hyphens become spaces and every word is
/// capitalized: `trevarn-colour-palette.html` reads `Trevarn Colour Palette`.
/// Words are runs of cased letters, so uncased characters such as digits or
/// CJK ideographs start a new word.
pub fn fallback_title(filename: &str, extension: &str) -> String {
    let stem = filename.strip_suffix(extension).unwrap_or(filename);

    let mut title = String::with_capacity(stem.len());
    let mut in_word = false;

    for c in stem.chars() {
        if c == '-' {
            title.push(' ');
            in_word = false;
        } else if c.is_uppercase() || c.is_lowercase() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }

    title
}

/// Pull the `<title>` text out of a document head, minus the brand prefix.
pub fn extract_title(head: &str, catalog: &Catalog) -> Result<String, TitleError> {
    let raw = TITLE_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .ok_or(TitleError::NotFound)?;

    let decoded = decode_entities(raw.as_str().trim());
    let title = catalog.strip_brand(&decoded).trim();

    if title.is_empty() {
        return Err(TitleError::NotFound);
    }

    Ok(title.to_string())
}

/// Read at most [`TITLE_SCAN_LIMIT`] bytes from the start of a file.
///
/// A multi-byte character cut by the limit is dropped; any other invalid
/// UTF-8 is an error.
fn read_head(path: &Path) -> Result<String, TitleError> {
    let mut buf = Vec::with_capacity(TITLE_SCAN_LIMIT);
    File::open(path)?
        .take(TITLE_SCAN_LIMIT as u64)
        .read_to_end(&mut buf)?;

    match String::from_utf8(buf) {
        Ok(head) => Ok(head),
        Err(e) => {
            let utf8 = e.utf8_error();
            if utf8.error_len().is_some() {
                return Err(TitleError::Encoding);
            }
            let mut bytes = e.into_bytes();
            bytes.truncate(utf8.valid_up_to());
            String::from_utf8(bytes).map_err(|_| TitleError::Encoding)
        }
    }
}

/// Resolve the display title of a document. Never fails.
pub fn resolve_title(path: &Path, filename: &str, lang: Language, catalog: &Catalog) -> String {
    let fallback = || fallback_title(filename, &catalog.config().extension);

    match lang {
        Language::Fr => catalog
            .secondary_title(filename)
            .map(str::to_string)
            .unwrap_or_else(fallback),
        Language::En => match read_head(path).and_then(|head| extract_title(&head, catalog)) {
            Ok(title) => title,
            Err(e) => {
                tracing::debug!("Using filename title for {}: {}", filename, e);
                fallback()
            }
        },
    }
}

/// Decode the handful of entities a `<title>` commonly carries.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
