//! Supported response languages
//!
//! The language set is closed: a builder can only ever hold one of the six
//! variants below, so an invalid language is not representable. Callers pass
//! two-letter codes at the edges and get silent fallback behavior instead of
//! errors (see [`crate::Respond::with_language`]).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Languages a response envelope can be rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    /// English ("en")
    #[serde(rename = "en")]
    English,
    /// Arabic ("ar")
    #[serde(rename = "ar")]
    Arabic,
    /// German ("de")
    #[serde(rename = "de")]
    German,
    /// French ("fr")
    #[serde(rename = "fr")]
    French,
    /// Spanish ("es")
    #[serde(rename = "es")]
    Spanish,
    /// Italian ("it")
    #[serde(rename = "it")]
    Italian,
}

impl Language {
    /// All supported languages, in catalog order
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Arabic,
        Language::German,
        Language::French,
        Language::Spanish,
        Language::Italian,
    ];

    /// Returns the two-letter code for the language
    pub const fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
            Language::German => "de",
            Language::French => "fr",
            Language::Spanish => "es",
            Language::Italian => "it",
        }
    }

    /// Returns the display name for the language, in that language
    pub const fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "العربية",
            Language::German => "Deutsch",
            Language::French => "Français",
            Language::Spanish => "Español",
            Language::Italian => "Italiano",
        }
    }

    /// Resolves a two-letter code to a language
    ///
    /// Codes are matched exactly and case-sensitively: `"en"` resolves,
    /// `"EN"` does not.
    pub fn from_code(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// Check if a language code is supported
    pub fn is_supported(code: &str) -> bool {
        Language::from_code(code).is_some()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
