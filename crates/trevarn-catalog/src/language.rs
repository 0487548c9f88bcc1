//! Site language variants.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the two languages the site is published in.
///
/// English is the primary variant: its documents are cataloged directly.
/// French is derived: its documents carry the secondary marker in their
/// filename and are linked under `/FR/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Both variants, primary first.
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// Lowercase language code, as used in `<html lang>`.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Whether this is the derived (translated) variant.
    pub fn is_secondary(self) -> bool {
        matches!(self, Language::Fr)
    }

    /// Root path of this language's index. Document links are nested under it.
    pub fn root_path(self) -> &'static str {
        match self {
            Language::En => "/",
            Language::Fr => "/FR/",
        }
    }

    /// The other language.
    pub fn counterpart(self) -> Language {
        match self {
            Language::En => Language::Fr,
            Language::Fr => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Returned when a language code is neither `en` nor `fr`.
#[derive(Debug, thiserror::Error)]
#[error("Unknown language '{0}' (expected 'en' or 'fr')")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            _ => Err(ParseLanguageError(s.to_string())),
        }
    }
}
