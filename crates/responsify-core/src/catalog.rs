//! Built-in translation catalog
//!
//! The default [`Translator`] implementation, backed by per-language JSON
//! files embedded at compile time from the repository-level `catalog/`
//! directory. Each file maps a status code to its message/details pair.
//! A file that fails to parse degrades to an empty catalog and logs once at
//! load time; lookups against it simply miss and the builder's fallback
//! chain takes over.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::error;

use crate::{Language, TextField, Translator};

const CATALOG_EN: &str = include_str!("../../../catalog/en.json");
const CATALOG_AR: &str = include_str!("../../../catalog/ar.json");
const CATALOG_DE: &str = include_str!("../../../catalog/de.json");
const CATALOG_FR: &str = include_str!("../../../catalog/fr.json");
const CATALOG_ES: &str = include_str!("../../../catalog/es.json");
const CATALOG_IT: &str = include_str!("../../../catalog/it.json");

/// One catalog row: the texts for a single status code
#[derive(Debug, Clone, Deserialize)]
struct CatalogEntry {
    message: String,
    details: String,
}

type Catalog = HashMap<u16, CatalogEntry>;

static CATALOGS: OnceLock<HashMap<Language, Catalog>> = OnceLock::new();

fn raw_catalog(language: Language) -> &'static str {
    match language {
        Language::English => CATALOG_EN,
        Language::Arabic => CATALOG_AR,
        Language::German => CATALOG_DE,
        Language::French => CATALOG_FR,
        Language::Spanish => CATALOG_ES,
        Language::Italian => CATALOG_IT,
    }
}

fn parse_catalog(language: Language, raw: &str) -> Catalog {
    let entries: HashMap<String, CatalogEntry> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            error!(
                language = language.code(),
                error = %err,
                "embedded catalog failed to parse, serving an empty catalog"
            );
            return Catalog::new();
        }
    };

    entries
        .into_iter()
        .filter_map(|(key, entry)| match key.parse::<u16>() {
            Ok(status) => Some((status, entry)),
            Err(_) => {
                error!(
                    language = language.code(),
                    key = %key,
                    "embedded catalog key is not a status code, skipping"
                );
                None
            }
        })
        .collect()
}

fn catalogs() -> &'static HashMap<Language, Catalog> {
    CATALOGS.get_or_init(|| {
        Language::ALL
            .into_iter()
            .map(|language| (language, parse_catalog(language, raw_catalog(language))))
            .collect()
    })
}

/// Translator over the embedded six-language catalog
///
/// This is the translator every builder starts with; swap it out with
/// [`crate::Respond::with_translator`] to serve texts from elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogTranslator;

impl CatalogTranslator {
    /// Create a catalog translator
    pub fn new() -> Self {
        Self
    }
}

impl Translator for CatalogTranslator {
    fn lookup(&self, language: Language, status: u16, field: TextField) -> Option<String> {
        let entry = catalogs().get(&language)?.get(&status)?;
        let text = match field {
            TextField::Message => &entry.message,
            TextField::Details => &entry.details,
        };
        Some(text.clone())
    }
}
